//! Query Handlers 实现

mod audio_file_handlers;

pub use audio_file_handlers::*;
