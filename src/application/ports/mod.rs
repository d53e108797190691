//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_file_store;

pub use audio_file_store::{AudioFileStorePort, DocumentCursor, RawDocument, StoreError};
