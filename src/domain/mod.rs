//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Audio File Context: 音频文件目录

pub mod audio_file;
