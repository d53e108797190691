//! Application State
//!
//! 启动时构建一次，注入到每个请求

use std::sync::Arc;

use crate::application::{AudioFileStorePort, ListAudioFilesHandler, PipelineConfig};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub store: Arc<dyn AudioFileStorePort>,

    // ========== Query Handlers ==========
    pub list_audio_files_handler: ListAudioFilesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn AudioFileStorePort>, pipeline: PipelineConfig) -> Self {
        Self {
            store: store.clone(),
            list_audio_files_handler: ListAudioFilesHandler::new(store, pipeline),
        }
    }
}
