//! Audio File Context - 音频文件目录上下文
//!
//! 职责:
//! - AudioFileRecord 实体（只读，由外部导入流程写入）
//! - 从存储文档解码

mod entity;
mod errors;

pub use entity::AudioFileRecord;
pub use errors::AudioFileError;
