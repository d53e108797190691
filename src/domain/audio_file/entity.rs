//! Audio File Context - Entity

use serde::{Deserialize, Serialize};

use super::AudioFileError;

/// 音频文件元数据
///
/// 文档字段名与 JSON 响应字段名一致：`file_name`、`storage_url`。
/// 文档中的其他字段（例如存储自带的 `_id`）在解码时忽略。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioFileRecord {
    /// 文件名，不保证唯一
    pub file_name: String,
    /// 音频内容的外部地址
    pub storage_url: String,
}

impl AudioFileRecord {
    pub fn new(file_name: impl Into<String>, storage_url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            storage_url: storage_url.into(),
        }
    }

    /// 从 JSON 文档解码
    pub fn decode(document_id: &str, body: &str) -> Result<Self, AudioFileError> {
        serde_json::from_str(body).map_err(|e| AudioFileError::decode(document_id, e.to_string()))
    }
}
