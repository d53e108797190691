//! Decode-Dispatch Stage
//!
//! 游标只允许一个读取者，解码始终在当前任务内顺序进行；
//! Concurrent 策略下只有"转发已解码记录"这一步被并行化。

use std::sync::Arc;

use futures_util::TryStreamExt;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{JoinError, JoinSet};

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentCursor;
use crate::domain::audio_file::AudioFileRecord;

/// 带游标序号的记录
#[derive(Debug)]
pub struct Indexed {
    pub index: usize,
    pub record: AudioFileRecord,
}

/// 顺序解码并追加
pub async fn drain_sequential(
    mut cursor: DocumentCursor<'_>,
) -> Result<Vec<AudioFileRecord>, ApplicationError> {
    let mut records = Vec::new();

    while let Some(document) = cursor.try_next().await? {
        records.push(AudioFileRecord::decode(&document.id, &document.body)?);
    }

    Ok(records)
}

/// 顺序解码，每条记录派发一个转发任务写入 `sender`
///
/// 同时存在的转发任务不超过 `max_in_flight` 个，已结束的转发任务在遍历中
/// 随时回收。全部转发任务结束后才释放 `sender`，通道随之关闭。任何错误都会
/// 提前返回：游标被释放，尚未完成的转发任务随 JoinSet 一起中止。
///
/// 返回派发的记录数。
pub async fn dispatch_concurrent(
    mut cursor: DocumentCursor<'_>,
    max_in_flight: usize,
    sender: mpsc::Sender<Indexed>,
) -> Result<usize, ApplicationError> {
    let semaphore = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut forwarders = JoinSet::new();
    let mut dispatched = 0usize;

    while let Some(document) = cursor.try_next().await? {
        let record = AudioFileRecord::decode(&document.id, &document.body)?;

        // 回收已结束的转发任务；Collector 提前关闭时在此发现
        while let Some(result) = forwarders.try_join_next() {
            settle(result)?;
        }

        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ApplicationError::internal(e.to_string()))?;
        let sender = sender.clone();
        let index = dispatched;

        forwarders.spawn(async move {
            let _permit = permit; // 持有 permit 直到发送完成
            sender.send(Indexed { index, record }).await.is_ok()
        });
        dispatched += 1;
    }
    drop(cursor);

    // 计数屏障：全部发送完成后才能关闭通道
    while let Some(result) = forwarders.join_next().await {
        settle(result)?;
    }
    drop(sender);

    tracing::debug!(dispatched, max_in_flight, "All forwarders completed");

    Ok(dispatched)
}

fn settle(result: Result<bool, JoinError>) -> Result<(), ApplicationError> {
    let delivered =
        result.map_err(|e| ApplicationError::internal(format!("Forwarder failed: {}", e)))?;
    if !delivered {
        return Err(ApplicationError::internal(
            "Collector closed before all records were forwarded",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{RawDocument, StoreError};
    use futures_util::stream::{self, StreamExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cursor_of(count: usize) -> DocumentCursor<'static> {
        stream::iter((0..count).map(|i| {
            Ok::<_, StoreError>(RawDocument::new(
                i.to_string(),
                format!(r#"{{"file_name":"{i}.wav","storage_url":"u/{i}"}}"#),
            ))
        }))
        .boxed()
    }

    #[tokio::test]
    async fn test_sequential_preserves_cursor_order() {
        let records = drain_sequential(cursor_of(5)).await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["0.wav", "1.wav", "2.wav", "3.wav", "4.wav"]);
    }

    #[tokio::test]
    async fn test_sequential_empty_cursor() {
        assert!(drain_sequential(cursor_of(0)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_channel_closes_after_last_forwarder() {
        let (sender, mut receiver) = mpsc::channel::<Indexed>(1);

        let consumer = tokio::spawn(async move {
            let mut indices = Vec::new();
            while let Some(item) = receiver.recv().await {
                indices.push(item.index);
            }
            indices
        });

        let dispatched = dispatch_concurrent(cursor_of(100), 8, sender).await.unwrap();
        let mut indices = consumer.await.unwrap();
        indices.sort_unstable();

        assert_eq!(dispatched, 100);
        assert_eq!(indices, (0..100).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_zero_max_in_flight_still_makes_progress() {
        let (sender, mut receiver) = mpsc::channel::<Indexed>(1);
        let consumer = tokio::spawn(async move {
            let mut n = 0;
            while receiver.recv().await.is_some() {
                n += 1;
            }
            n
        });

        assert_eq!(dispatch_concurrent(cursor_of(3), 0, sender).await.unwrap(), 3);
        assert_eq!(consumer.await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_dropped_collector_is_an_error() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);

        let err = dispatch_concurrent(cursor_of(3), 2, sender).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InternalError(_)));
    }

    #[tokio::test]
    async fn test_closed_collector_stops_traversal_early() {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = pulled.clone();
        let cursor = stream::iter(0..1000usize)
            .map(move |i| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, StoreError>(RawDocument::new(
                    i.to_string(),
                    format!(r#"{{"file_name":"{i}.wav","storage_url":"u/{i}"}}"#),
                ))
            })
            .boxed();

        let (sender, receiver) = mpsc::channel::<Indexed>(1);
        drop(receiver);

        let err = dispatch_concurrent(cursor, 1, sender).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InternalError(_)));
        assert!(pulled.load(Ordering::SeqCst) < 1000);
    }
}
