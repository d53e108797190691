//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::audio_file::AudioFileError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 存储查询失败
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// 文档不符合 AudioFileRecord 结构
    #[error("Decode failed for document {document_id}: {reason}")]
    DecodeFailed { document_id: String, reason: String },

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Query(msg) => Self::QueryFailed(msg),
            // 请求期间连接断开同样视为查询失败
            StoreError::Connection(msg) => Self::QueryFailed(msg),
        }
    }
}

impl From<AudioFileError> for ApplicationError {
    fn from(err: AudioFileError) -> Self {
        match err {
            AudioFileError::Decode {
                document_id,
                reason,
            } => Self::DecodeFailed {
                document_id,
                reason,
            },
        }
    }
}
