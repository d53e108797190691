//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（AudioFileStore）
//! - pipeline: 游标遍历与扇出/扇入
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod pipeline;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use pipeline::{collect_records, PipelineConfig, PipelineStrategy};

pub use ports::{AudioFileStorePort, DocumentCursor, RawDocument, StoreError};

pub use queries::{handlers::ListAudioFilesHandler, AudioFileListing, ListAudioFiles};
