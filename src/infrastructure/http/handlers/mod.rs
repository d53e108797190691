//! HTTP Handlers

mod audio_files;
mod ping;

pub use audio_files::*;
pub use ping::*;
