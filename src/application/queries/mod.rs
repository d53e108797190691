//! 应用层 - 查询（读操作）

mod audio_file_queries;

pub mod handlers;

pub use audio_file_queries::*;
