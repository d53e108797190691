//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping          GET      健康检查（含存储存活检查）
//! - /api/audio-files   GET      列出全部音频文件
//! - /api/audio-files   OPTIONS  CORS 预检，不访问存储

use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::middleware::cors_headers_middleware;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(audio_file_routes())
}

/// Audio file 路由
fn audio_file_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/audio-files",
            get(handlers::list_audio_files).options(handlers::audio_files_preflight),
        )
        .route_layer(middleware::from_fn(cors_headers_middleware))
}
