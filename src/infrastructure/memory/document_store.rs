//! In-Memory Document Store Implementation

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::application::ports::{AudioFileStorePort, DocumentCursor, RawDocument, StoreError};

/// 内存文档存储
///
/// 克隆共享同一份文档与查询计数。支持故障注入，供测试使用。
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<Vec<RawDocument>>,
    query_error: Option<String>,
    /// (已产出文档数, 错误信息)
    scan_error: Option<(usize, String)>,
    ping_error: Option<String>,
    queries: Arc<AtomicUsize>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<RawDocument>) -> Self {
        Self {
            documents: Arc::new(documents),
            ..Self::default()
        }
    }

    /// 打开游标时失败
    pub fn fail_query(mut self, message: impl Into<String>) -> Self {
        self.query_error = Some(message.into());
        self
    }

    /// 产出 `after` 个文档后游标失败
    pub fn fail_scan_after(mut self, after: usize, message: impl Into<String>) -> Self {
        self.scan_error = Some((after, message.into()));
        self
    }

    /// 存活检查失败
    pub fn fail_ping(mut self, message: impl Into<String>) -> Self {
        self.ping_error = Some(message.into());
        self
    }

    /// 已执行的查询次数
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioFileStorePort for InMemoryDocumentStore {
    async fn query(&self) -> Result<DocumentCursor<'_>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.query_error {
            return Err(StoreError::Query(message.clone()));
        }

        let documents = self.documents.iter().cloned().map(Ok);
        let cursor = match &self.scan_error {
            Some((after, message)) => documents
                .take(*after)
                .chain(std::iter::once(Err(StoreError::Query(message.clone()))))
                .collect::<Vec<_>>(),
            None => documents.collect(),
        };

        Ok(stream::iter(cursor).boxed())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match &self.ping_error {
            Some(message) => Err(StoreError::Connection(message.clone())),
            None => Ok(()),
        }
    }
}
