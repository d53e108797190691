//! Collector - 扇入

use tokio::sync::mpsc;

use super::dispatch::Indexed;
use crate::domain::audio_file::AudioFileRecord;

/// 从共享通道读取直到通道关闭
pub struct Collector {
    receiver: mpsc::Receiver<Indexed>,
}

impl Collector {
    pub fn new(receiver: mpsc::Receiver<Indexed>) -> Self {
        Self { receiver }
    }

    pub async fn run(mut self) -> Vec<Indexed> {
        let mut collected = Vec::new();
        while let Some(item) = self.receiver.recv().await {
            collected.push(item);
        }
        collected
    }
}

/// 按游标序号还原顺序
pub fn reassemble(mut collected: Vec<Indexed>) -> Vec<AudioFileRecord> {
    collected.sort_unstable_by_key(|item| item.index);
    collected.into_iter().map(|item| item.record).collect()
}
