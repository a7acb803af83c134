use quran_core::{
    download::unique_target,
    media::PlaybackError,
    share::ShareOutcome,
    strings,
    worker::FetchRequest,
};
use tracing::{debug, error, info};

use super::types::{Alert, AudioFocus, Section};
use super::App;

impl App {
    fn chapter_under_cursor(&self) -> Option<u16> {
        let chapters = self.catalog.chapters();
        match self.section {
            Section::Audio => chapters.get(self.audio_cursor).map(|c| c.index),
            Section::Quran => chapters.get(self.grid_cursor).map(|c| c.index),
            Section::Reader => self.reader.active().map(|c| c.summary.index),
            _ => self
                .player
                .now_playing()
                .map(|n| n.chapter_index)
                .or(self.catalog.active()),
        }
    }

    pub(super) fn play_current(&mut self) {
        if let Some(index) = self.chapter_under_cursor() {
            self.play_chapter(index);
        }
    }

    /// Assigns the recitation and starts it. Without a reciter the user is
    /// sent to the reciter list instead.
    pub fn play_chapter(&mut self, index: u16) {
        match self.player.play(&self.catalog, index) {
            Ok(true) => {
                if let Err(e) = self.player.resume() {
                    self.playback_failed(e);
                }
                if let Some(pos) = self.catalog.position_of(index) {
                    self.audio_cursor = pos;
                }
            }
            Ok(false) => debug!(index, "nothing to play"),
            Err(PlaybackError::NoReciter) => {
                self.alert = Some(Alert::new(strings::CHOOSE_RECITER_FIRST));
                self.section = Section::Audio;
                self.audio_focus = AudioFocus::Reciters;
            }
            Err(e) => self.playback_failed(e),
        }
    }

    pub(super) fn toggle_pause(&mut self) {
        match self.player.toggle() {
            Ok(()) => {}
            Err(PlaybackError::NoSource) => debug!("toggle without a source"),
            Err(e) => self.playback_failed(e),
        }
    }

    pub(super) fn stop(&mut self) {
        match self.player.stop() {
            Ok(()) => {}
            Err(PlaybackError::NoSource) => debug!("stop without a source"),
            Err(e) => self.playback_failed(e),
        }
    }

    fn playback_failed(&mut self, e: PlaybackError) {
        error!(error = %e, "playback failed");
        self.alert = Some(Alert::new(strings::PLAYBACK_FAILED));
    }

    pub(super) fn download(&mut self) {
        let plan = match self.player.download_plan() {
            Ok(plan) => plan,
            Err(_) => {
                self.alert = Some(Alert::new(strings::NOTHING_TO_DOWNLOAD));
                return;
            }
        };
        let path = unique_target(&self.download_dir, &plan.file_name);
        info!(url = %plan.url, path = %path.display(), "starting download");
        self.worker.request(FetchRequest::Download {
            url: plan.url,
            path,
        });
        self.notice = Some(strings::DOWNLOAD_STARTED.to_string());
    }

    pub(super) fn share(&mut self) {
        match self.share.share() {
            ShareOutcome::Shared => {}
            ShareOutcome::Copied => {
                self.alert = Some(Alert::new(strings::SHARE_COPIED));
            }
            ShareOutcome::ManualCopy(url) => {
                self.alert = Some(Alert::titled(strings::SHARE_MANUAL, url));
            }
        }
    }
}
