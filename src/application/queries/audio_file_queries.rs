//! Audio File Queries

use crate::domain::audio_file::AudioFileRecord;

/// 列出全部音频文件查询
#[derive(Debug, Clone)]
pub struct ListAudioFiles;

/// 列表查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioFileListing {
    /// 没有任何记录
    Empty,
    /// 至少一条记录
    Populated(Vec<AudioFileRecord>),
}

impl AudioFileListing {
    pub fn from_records(records: Vec<AudioFileRecord>) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Populated(records)
        }
    }
}
