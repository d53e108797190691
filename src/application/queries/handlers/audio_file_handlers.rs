//! Audio File Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::pipeline::{collect_records, PipelineConfig};
use crate::application::ports::AudioFileStorePort;
use crate::application::queries::{AudioFileListing, ListAudioFiles};

/// ListAudioFiles Handler
pub struct ListAudioFilesHandler {
    store: Arc<dyn AudioFileStorePort>,
    pipeline: PipelineConfig,
}

impl ListAudioFilesHandler {
    pub fn new(store: Arc<dyn AudioFileStorePort>, pipeline: PipelineConfig) -> Self {
        Self { store, pipeline }
    }

    pub async fn handle(&self, _query: ListAudioFiles) -> Result<AudioFileListing, ApplicationError> {
        let cursor = self.store.query().await?;
        let records = collect_records(cursor, &self.pipeline).await?;

        tracing::debug!(
            strategy = self.pipeline.strategy.as_str(),
            count = records.len(),
            "Audio files collected"
        );

        Ok(AudioFileListing::from_records(records))
    }
}
