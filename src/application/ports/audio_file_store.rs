//! Audio File Store Port - 出站端口
//!
//! 文档存储的抽象接口，具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 无法建立连接或存活检查失败
    #[error("Connection error: {0}")]
    Connection(String),

    /// 查询（含游标推进）失败
    #[error("Query error: {0}")]
    Query(String),
}

/// 存储中的原始文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// 文档 ID，仅用于诊断
    pub id: String,
    /// JSON 文档内容
    pub body: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

/// 文档游标
///
/// 顺序、单消费者；drop 即释放。
pub type DocumentCursor<'a> = BoxStream<'a, Result<RawDocument, StoreError>>;

/// Audio File Store Port
#[async_trait]
pub trait AudioFileStorePort: Send + Sync {
    /// 查询 AudioFiles 集合中的全部文档
    async fn query(&self) -> Result<DocumentCursor<'_>, StoreError>;

    /// 存活检查
    async fn ping(&self) -> Result<(), StoreError>;
}
