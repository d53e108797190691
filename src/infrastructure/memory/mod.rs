//! Memory Layer - In-Memory Adapters
//!
//! 内存文档存储，用于测试

mod document_store;

pub use document_store::InMemoryDocumentStore;
