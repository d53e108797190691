//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;

/// 空结果提示
pub const NO_AUDIO_FILES_MESSAGE: &str = "No audio files found";
/// 查询失败提示
pub const QUERY_FAILED_MESSAGE: &str = "Failed to retrieve audio files.";
/// 解码失败提示
pub const DECODE_FAILED_MESSAGE: &str = "Error decoding audio file";
/// 内部错误提示
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
/// 存储不可用提示
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Document store unavailable";

/// API 错误
///
/// 响应体为纯文本提示。内部细节在构造处记录一次，这里不再写日志。
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, message).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match &e {
            ApplicationError::QueryFailed(_) => {
                tracing::error!(error = %e, "Audio file query failed");
                ApiError::Internal(QUERY_FAILED_MESSAGE.to_string())
            }
            ApplicationError::DecodeFailed { .. } => {
                tracing::error!(error = %e, "Audio file document rejected");
                ApiError::Internal(DECODE_FAILED_MESSAGE.to_string())
            }
            ApplicationError::InternalError(_) => {
                tracing::error!(error = %e, "Audio file pipeline failed");
                ApiError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}
