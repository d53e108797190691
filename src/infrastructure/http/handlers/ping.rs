//! Ping Handler
//!
//! 健康检查，同时检查文档存储是否可用

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::{ApiError, STORE_UNAVAILABLE_MESSAGE};
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Store ping failed");
        ApiError::ServiceUnavailable(STORE_UNAVAILABLE_MESSAGE.to_string())
    })?;

    Ok(Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
