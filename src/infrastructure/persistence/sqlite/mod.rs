//! SQLite Persistence - SQLite 文档存储实现

mod database;
mod document_store;

pub use database::*;
pub use document_store::*;
