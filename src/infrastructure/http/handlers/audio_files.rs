//! Audio File Handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{AudioFileListing, ListAudioFiles};
use crate::infrastructure::http::error::{ApiError, NO_AUDIO_FILES_MESSAGE};
use crate::infrastructure::http::state::AppState;

/// GET /api/audio-files
///
/// 空结果返回 404，否则返回完整 JSON 数组
pub async fn list_audio_files(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    match state.list_audio_files_handler.handle(ListAudioFiles).await? {
        AudioFileListing::Empty => Err(ApiError::NotFound(NO_AUDIO_FILES_MESSAGE.to_string())),
        AudioFileListing::Populated(records) => Ok(Json(records).into_response()),
    }
}

/// OPTIONS /api/audio-files
///
/// 不访问存储，CORS 头由中间件设置
pub async fn audio_files_preflight() -> StatusCode {
    StatusCode::OK
}
