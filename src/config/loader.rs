//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `PORT` 环境变量（仅监听端口）
//! 2. `AUDIO_CATALOG_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8092`
/// - `AUDIO_CATALOG_SERVER__HOST=127.0.0.1`
/// - `AUDIO_CATALOG_STORE__URI=sqlite:/data/catalog.db`
/// - `AUDIO_CATALOG_STORE__URI_FILE=/run/secrets/store_uri`
/// - `AUDIO_CATALOG_PIPELINE__STRATEGY=concurrent`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_port(config_path, std::env::var("PORT").ok())
}

fn load_with_port(
    config_path: Option<&Path>,
    port: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8092)?
        .set_default("store.collection", "AudioFiles")?
        .set_default("store.max_connections", 5)?
        .set_default("pipeline.strategy", "sequential")?
        .set_default("pipeline.max_in_flight", 16)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 例如: AUDIO_CATALOG_STORE__URI=sqlite:/data/catalog.db
    builder = builder.add_source(
        Environment::with_prefix("AUDIO_CATALOG")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. PORT（最高优先级）
    if let Some(port) = port.filter(|p| !p.is_empty()) {
        let port: u16 = port
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("Invalid PORT '{}': {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    resolve_store_uri(&mut app_config)?;
    validate_config(&app_config)?;

    Ok(app_config)
}

/// `store.uri` 未设置时从 `store.uri_file` 读取
fn resolve_store_uri(config: &mut AppConfig) -> Result<(), ConfigError> {
    if config.store.uri.as_deref().is_some_and(|uri| !uri.trim().is_empty()) {
        return Ok(());
    }

    if let Some(path) = &config.store.uri_file {
        let uri = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read store URI file {}: {}",
                path.display(),
                e
            ))
        })?;
        config.store.uri = Some(uri.trim().to_string());
    }

    Ok(())
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config
        .store
        .uri
        .as_deref()
        .map_or(true, |uri| uri.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "Store URI must be provided via AUDIO_CATALOG_STORE__URI or store.uri_file"
                .to_string(),
        ));
    }

    if config.store.collection.is_empty() {
        return Err(ConfigError::ValidationError(
            "Store collection cannot be empty".to_string(),
        ));
    }

    if config.pipeline.max_in_flight == 0 {
        return Err(ConfigError::ValidationError(
            "Pipeline max_in_flight must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Store URI: {}", config.store.redacted_uri());
    tracing::info!("Store Collection: {}", config.store.collection);
    tracing::info!("Store Max Connections: {}", config.store.max_connections);
    tracing::info!("Pipeline Strategy: {}", config.pipeline.strategy.as_str());
    if config.pipeline.strategy == crate::application::PipelineStrategy::Concurrent {
        tracing::info!("Pipeline Max In Flight: {}", config.pipeline.max_in_flight);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PipelineStrategy;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.store.uri = Some("sqlite::memory:".to_string());
        config
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_store_uri() {
        let mut config = valid_config();
        config.store.uri = None;
        assert!(validate_config(&config).is_err());

        config.store.uri = Some("   ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_collection() {
        let mut config = valid_config();
        config.store.collection = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_max_in_flight() {
        let mut config = valid_config();
        config.pipeline.max_in_flight = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = toml_file(
            r#"
            [server]
            port = 9000

            [store]
            uri = "sqlite:catalog.db"
            collection = "Tracks"

            [pipeline]
            strategy = "concurrent"
            max_in_flight = 4
            "#,
        );

        let config = load_with_port(Some(file.path()), None).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.uri.as_deref(), Some("sqlite:catalog.db"));
        assert_eq!(config.store.collection, "Tracks");
        assert_eq!(config.pipeline.strategy, PipelineStrategy::Concurrent);
        assert_eq!(config.pipeline.max_in_flight, 4);
    }

    #[test]
    fn test_port_override_wins_over_file() {
        let file = toml_file("[server]\nport = 9000\n[store]\nuri = \"sqlite:a.db\"\n");

        let config = load_with_port(Some(file.path()), Some("7001".to_string())).unwrap();
        assert_eq!(config.server.port, 7001);
    }

    #[test]
    fn test_invalid_port_override() {
        let file = toml_file("[store]\nuri = \"sqlite:a.db\"\n");

        let err = load_with_port(Some(file.path()), Some("eighty".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_uri_fails_to_load() {
        let file = toml_file("[server]\nport = 9000\n");

        let err = load_with_port(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_uri_read_from_secret_file() {
        let mut secret = tempfile::NamedTempFile::new().unwrap();
        writeln!(secret, "sqlite:/data/catalog.db").unwrap();

        let mut config = AppConfig::default();
        config.store.uri_file = Some(secret.path().to_path_buf());
        resolve_store_uri(&mut config).unwrap();

        assert_eq!(config.store.uri.as_deref(), Some("sqlite:/data/catalog.db"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_inline_uri_takes_precedence_over_file() {
        let mut config = valid_config();
        config.store.uri_file = Some("/does/not/exist".into());
        resolve_store_uri(&mut config).unwrap();
        assert_eq!(config.store.uri.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_unreadable_secret_file() {
        let mut config = AppConfig::default();
        config.store.uri_file = Some("/does/not/exist".into());
        assert!(matches!(
            resolve_store_uri(&mut config),
            Err(ConfigError::LoadError(_))
        ));
    }
}
