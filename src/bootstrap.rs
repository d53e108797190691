//! Bootstrap - 启动装配
//!
//! 先连接并验证文档存储，成功后才构建 HTTP 服务器。
//! 连接失败以 `Err` 返回，由调用方决定是否退出或重试。

use std::sync::Arc;

use thiserror::Error;

use crate::application::StoreError;
use crate::config::AppConfig;
use crate::infrastructure::http::{AppState, HttpServer};
use crate::infrastructure::persistence::sqlite::{connect, DatabaseConfig};

/// 启动错误
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Store URI is not configured")]
    MissingStoreUri,

    #[error("Failed to connect to document store: {0}")]
    Store(#[from] StoreError),
}

/// 连接存储并构建 HTTP 服务器（尚未绑定端口）
pub async fn build_server(config: &AppConfig) -> Result<HttpServer, BootstrapError> {
    let database_url = config
        .store
        .uri
        .clone()
        .filter(|uri| !uri.trim().is_empty())
        .ok_or(BootstrapError::MissingStoreUri)?;

    let db_config = DatabaseConfig {
        database_url,
        max_connections: config.store.max_connections,
        collection: config.store.collection.clone(),
    };
    let store = Arc::new(connect(&db_config).await?);

    let state = AppState::new(store, config.pipeline.clone());

    Ok(HttpServer::new(config.server.clone(), state))
}
