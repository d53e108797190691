//! Retrieval Pipeline - 游标遍历 + 扇出/扇入
//!
//! 两种策略:
//! - Sequential: 顺序解码并直接追加（默认）
//! - Concurrent: 顺序解码，按记录派发转发任务写入共享通道，由 Collector 汇聚
//!
//! 两种策略在解码失败时均为 fail-closed：整个请求失败，不返回部分结果。

mod collector;
mod dispatch;

use serde::Deserialize;
use tokio::sync::mpsc;

pub use collector::{reassemble, Collector};
pub use dispatch::{dispatch_concurrent, drain_sequential, Indexed};

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentCursor;
use crate::domain::audio_file::AudioFileRecord;

/// 汇聚策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStrategy {
    #[default]
    Sequential,
    Concurrent,
}

impl PipelineStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStrategy::Sequential => "sequential",
            PipelineStrategy::Concurrent => "concurrent",
        }
    }
}

/// Pipeline 配置，对应配置文件 `[pipeline]` 段
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// sequential | concurrent
    pub strategy: PipelineStrategy,
    /// Concurrent 策略下同时存在的转发任务上限
    pub max_in_flight: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strategy: PipelineStrategy::Sequential,
            max_in_flight: 16,
        }
    }
}

impl PipelineConfig {
    pub fn new(strategy: PipelineStrategy, max_in_flight: usize) -> Self {
        Self {
            strategy,
            max_in_flight,
        }
    }
}

/// 将游标中的全部文档解码为记录
///
/// 返回顺序与游标顺序一致；调用方仍应按集合对待。
pub async fn collect_records(
    cursor: DocumentCursor<'_>,
    config: &PipelineConfig,
) -> Result<Vec<AudioFileRecord>, ApplicationError> {
    match config.strategy {
        PipelineStrategy::Sequential => drain_sequential(cursor).await,
        PipelineStrategy::Concurrent => {
            // 容量 1：最接近无缓冲通道的 tokio mpsc
            let (sender, receiver) = mpsc::channel(1);
            let collector = Collector::new(receiver);

            let (dispatched, collected) = tokio::join!(
                dispatch_concurrent(cursor, config.max_in_flight, sender),
                collector.run()
            );

            let expected = dispatched?;
            if collected.len() != expected {
                return Err(ApplicationError::internal(format!(
                    "Collected {} records but dispatched {}",
                    collected.len(),
                    expected
                )));
            }

            Ok(reassemble(collected))
        }
    }
}
