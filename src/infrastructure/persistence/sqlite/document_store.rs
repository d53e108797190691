//! SQLite Document Store

use async_trait::async_trait;
use futures_util::StreamExt;
use sqlx::FromRow;

use super::{create_pool, ensure_schema, DatabaseConfig, DbPool};
use crate::application::ports::{AudioFileStorePort, DocumentCursor, RawDocument, StoreError};

/// SQLite 文档存储
///
/// 每个文档是 `documents` 表中的一行 JSON，按 `collection` 归类。
pub struct SqliteDocumentStore {
    pool: DbPool,
    collection: String,
}

impl SqliteDocumentStore {
    pub fn new(pool: DbPool, collection: impl Into<String>) -> Self {
        Self {
            pool,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// 建立连接并完成存活检查
///
/// 失败时返回 `StoreError::Connection`，由调用方决定如何处理。
pub async fn connect(config: &DatabaseConfig) -> Result<SqliteDocumentStore, StoreError> {
    let pool = create_pool(config)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    ensure_schema(&pool)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    let store = SqliteDocumentStore::new(pool, config.collection.clone());
    store.ping().await?;

    tracing::info!(collection = %store.collection, "Connected to document store");

    Ok(store)
}

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    body: String,
}

impl From<DocumentRow> for RawDocument {
    fn from(row: DocumentRow) -> Self {
        RawDocument::new(row.id, row.body)
    }
}

#[async_trait]
impl AudioFileStorePort for SqliteDocumentStore {
    async fn query(&self) -> Result<DocumentCursor<'_>, StoreError> {
        let cursor = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE collection = ? ORDER BY rowid",
        )
        .bind(self.collection.as_str())
        .fetch(&self.pool)
        .map(|row| {
            row.map(RawDocument::from)
                .map_err(|e| StoreError::Query(e.to_string()))
        })
        .boxed();

        Ok(cursor)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(())
    }
}
