//! Audio File Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioFileError {
    #[error("文档 {document_id} 解码失败: {reason}")]
    Decode { document_id: String, reason: String },
}

impl AudioFileError {
    pub fn decode(document_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            document_id: document_id.into(),
            reason: reason.into(),
        }
    }
}
