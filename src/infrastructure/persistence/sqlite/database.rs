//! SQLite Database - 数据库连接与文档表

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 连接 URI（来自配置或密钥文件，不写死在代码里）
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 文档集合名
    pub collection: String,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            collection: collection.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            collection: "AudioFiles".to_string(),
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 设置 busy_timeout=5000ms，导入流程写入时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 确保文档表存在
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id TEXT PRIMARY KEY,
            collection TEXT NOT NULL,
            body TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_documents_collection
        ON documents(collection)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Document schema ready");
    Ok(())
}
