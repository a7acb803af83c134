use super::{MediaElement, PlaybackError};

/// Tracks source and transport state without producing audio. Used when no
/// audio backend could be started.
#[derive(Debug, Default)]
pub struct DetachedElement {
    source: Option<String>,
    playing: bool,
    rewinds: usize,
}

impl DetachedElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rewinds(&self) -> usize {
        self.rewinds
    }
}

impl MediaElement for DetachedElement {
    fn set_source(&mut self, url: &str) -> Result<(), PlaybackError> {
        self.source = Some(url.to_string());
        self.playing = false;
        Ok(())
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.source.is_none() {
            return Err(PlaybackError::NoSource);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.playing = false;
        Ok(())
    }

    fn seek_to_start(&mut self) -> Result<(), PlaybackError> {
        self.rewinds += 1;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
