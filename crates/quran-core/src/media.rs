mod detached;
mod mpv;

pub use detached::DetachedElement;
pub use mpv::MpvElement;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no reciter selected")]
    NoReciter,
    #[error("no audio source assigned")]
    NoSource,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("media backend error: {0}")]
    Backend(String),
}

/// The playback primitive the recitation player drives. Assigning a source
/// loads it paused; the transport calls map onto the backend's own state.
pub trait MediaElement {
    fn set_source(&mut self, url: &str) -> Result<(), PlaybackError>;
    fn source(&self) -> Option<&str>;
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self) -> Result<(), PlaybackError>;
    fn seek_to_start(&mut self) -> Result<(), PlaybackError>;
    fn is_playing(&self) -> bool;
}
