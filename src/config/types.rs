//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::pipeline::PipelineConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文档存储配置
    #[serde(default)]
    pub store: StoreConfig,

    /// 汇聚管线配置
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8092
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 文档存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// 连接 URI，属于密钥，只能来自环境变量或配置文件
    #[serde(default)]
    pub uri: Option<String>,

    /// 存放连接 URI 的密钥文件（如容器 secret），`uri` 未设置时使用
    #[serde(default)]
    pub uri_file: Option<PathBuf>,

    /// 文档集合名
    #[serde(default = "default_collection")]
    pub collection: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_collection() -> String {
    "AudioFiles".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: None,
            uri_file: None,
            collection: default_collection(),
            max_connections: default_max_connections(),
        }
    }
}

impl StoreConfig {
    /// 用于日志输出的 URI：只保留 scheme
    pub fn redacted_uri(&self) -> String {
        match (&self.uri, &self.uri_file) {
            (Some(uri), _) => match uri.split_once(':') {
                Some((scheme, _)) => format!("{}:***", scheme),
                None => "***".to_string(),
            },
            (None, Some(path)) => format!("<from {}>", path.display()),
            (None, None) => "<unset>".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PipelineStrategy;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8092);
        assert_eq!(config.store.uri, None);
        assert_eq!(config.store.collection, "AudioFiles");
        assert_eq!(config.pipeline.strategy, PipelineStrategy::Sequential);
        assert_eq!(config.pipeline.max_in_flight, 16);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8092");

        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_redacted_uri_hides_credentials() {
        let mut config = StoreConfig::default();
        assert_eq!(config.redacted_uri(), "<unset>");

        config.uri = Some("sqlite:/data/secret-catalog.db".to_string());
        assert_eq!(config.redacted_uri(), "sqlite:***");

        config.uri = None;
        config.uri_file = Some(PathBuf::from("/run/secrets/store_uri"));
        assert_eq!(config.redacted_uri(), "<from /run/secrets/store_uri>");
    }
}
