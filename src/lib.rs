//! Audio Catalog - 音频文件目录只读服务
//!
//! 架构设计: Hexagonal Architecture + CQRS 查询侧
//!
//! 领域层 (domain/):
//! - Audio File Context: AudioFileRecord 及其解码
//!
//! 应用层 (application/):
//! - Ports: AudioFileStore 端口（游标查询、存活检查）
//! - Pipeline: 游标遍历、扇出/扇入汇聚
//! - Queries: ListAudioFiles 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 文档存储
//! - Memory: 内存文档存储

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
