use tracing::{info, warn};

use crate::catalog::ScriptureCatalog;
use crate::media::{MediaElement, PlaybackError};
use crate::strings;
use crate::types::Reciter;

/// `{base}/{index:03}.mp3`, the mp3quran.net layout.
pub fn audio_url(base_url: &str, chapter_index: u16) -> String {
    format!("{}/{:03}.mp3", base_url.trim_end_matches('/'), chapter_index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub chapter_index: u16,
    pub chapter_name: String,
    pub reciter_name: String,
}

impl NowPlaying {
    pub fn chapter_label(&self) -> String {
        format!("{} {}", strings::CHAPTER_PREFIX, self.chapter_name)
    }

    pub fn reciter_label(&self) -> String {
        format!("{} {}", strings::RECITER_PREFIX, self.reciter_name)
    }

    pub fn file_name(&self) -> String {
        let name = format!(
            "{} {} - {}.mp3",
            strings::CHAPTER_PREFIX,
            self.chapter_name,
            self.reciter_name
        );
        name.replace(['/', '\\'], "-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub url: String,
    pub file_name: String,
}

pub struct RecitationPlayer {
    reciters: Vec<Reciter>,
    selected: Option<String>,
    media: Box<dyn MediaElement>,
    now_playing: Option<NowPlaying>,
}

impl RecitationPlayer {
    pub fn new(reciters: Vec<Reciter>, media: Box<dyn MediaElement>) -> Self {
        Self {
            reciters,
            selected: None,
            media,
            now_playing: None,
        }
    }

    pub fn reciters(&self) -> &[Reciter] {
        &self.reciters
    }

    pub fn select_reciter(&mut self, id: &str) -> bool {
        if self.reciters.iter().any(|r| r.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            warn!(id, "unknown reciter");
            false
        }
    }

    pub fn selected_reciter(&self) -> Option<&Reciter> {
        let id = self.selected.as_deref()?;
        self.reciters.iter().find(|r| r.id == id)
    }

    /// Assign the recitation of `chapter_index` to the media element.
    /// Returns `Ok(false)` when the chapter or reciter cannot be found.
    /// The same recitation is not assigned twice.
    pub fn play(
        &mut self,
        catalog: &ScriptureCatalog,
        chapter_index: u16,
    ) -> Result<bool, PlaybackError> {
        if self.selected.is_none() {
            return Err(PlaybackError::NoReciter);
        }
        let (Some(chapter), Some(reciter)) =
            (catalog.find(chapter_index), self.selected_reciter())
        else {
            return Ok(false);
        };
        let url = audio_url(&reciter.base_url, chapter_index);
        // Already loaded: keep the position so a resume continues from it.
        if self.media.source() == Some(url.as_str()) {
            return Ok(true);
        }
        let now = NowPlaying {
            chapter_index,
            chapter_name: chapter.name.clone(),
            reciter_name: reciter.name.clone(),
        };
        info!(%url, "assigning recitation");
        self.media.set_source(&url)?;
        self.now_playing = Some(now);
        Ok(true)
    }

    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        self.media.play()
    }

    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        self.media.pause()
    }

    pub fn toggle(&mut self) -> Result<(), PlaybackError> {
        if self.media.is_playing() {
            self.pause()
        } else {
            self.resume()
        }
    }

    pub fn stop(&mut self) -> Result<(), PlaybackError> {
        self.media.pause()?;
        self.media.seek_to_start()
    }

    pub fn is_playing(&self) -> bool {
        self.media.is_playing()
    }

    pub fn source(&self) -> Option<&str> {
        self.media.source()
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    pub fn download_plan(&self) -> Result<DownloadPlan, PlaybackError> {
        let url = self
            .media
            .source()
            .filter(|s| !s.is_empty())
            .ok_or(PlaybackError::NoSource)?;
        let file_name = self
            .now_playing
            .as_ref()
            .map(NowPlaying::file_name)
            .unwrap_or_else(|| "recitation.mp3".to_string());
        Ok(DownloadPlan {
            url: url.to_string(),
            file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::DetachedElement;
    use crate::types::{ChapterSummary, RevelationPlace};
    use std::{cell::Cell, rc::Rc};

    /// Counts loads and rewinds on shared cells the test keeps.
    #[derive(Default)]
    struct Counters {
        loads: Cell<usize>,
        rewinds: Cell<usize>,
    }

    struct CountingElement {
        inner: DetachedElement,
        counters: Rc<Counters>,
    }

    impl MediaElement for CountingElement {
        fn set_source(&mut self, url: &str) -> Result<(), PlaybackError> {
            self.counters.loads.set(self.counters.loads.get() + 1);
            self.inner.set_source(url)
        }

        fn source(&self) -> Option<&str> {
            self.inner.source()
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            self.inner.play()
        }

        fn pause(&mut self) -> Result<(), PlaybackError> {
            self.inner.pause()
        }

        fn seek_to_start(&mut self) -> Result<(), PlaybackError> {
            self.inner.seek_to_start()?;
            self.counters.rewinds.set(self.inner.rewinds());
            Ok(())
        }

        fn is_playing(&self) -> bool {
            self.inner.is_playing()
        }
    }

    fn counted_player() -> (RecitationPlayer, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        let media = CountingElement {
            inner: DetachedElement::new(),
            counters: Rc::clone(&counters),
        };
        (RecitationPlayer::new(reciters(), Box::new(media)), counters)
    }

    fn reciters() -> Vec<Reciter> {
        vec![
            Reciter {
                id: "1".into(),
                name: "مشاري العفاسي".into(),
                base_url: "https://server8.mp3quran.net/afs".into(),
            },
            Reciter {
                id: "2".into(),
                name: "محمود خليل الحصري".into(),
                base_url: "https://server8.mp3quran.net/husary/".into(),
            },
        ]
    }

    fn catalog() -> ScriptureCatalog {
        let mut catalog = ScriptureCatalog::new();
        let chapters = [1u16, 12, 114]
            .iter()
            .map(|&index| ChapterSummary {
                index,
                name: format!("سورة-{index}"),
                english_name: format!("S{index}"),
                english_translation: String::new(),
                verse_count: 3,
                revelation_place: RevelationPlace::Meccan,
            })
            .collect();
        catalog.apply_load(Ok(chapters));
        catalog
    }

    fn player() -> RecitationPlayer {
        RecitationPlayer::new(reciters(), Box::new(DetachedElement::new()))
    }

    #[test]
    fn zero_pads_chapter_to_three_digits() {
        assert_eq!(audio_url("https://h/afs", 1), "https://h/afs/001.mp3");
        assert_eq!(audio_url("https://h/afs", 12), "https://h/afs/012.mp3");
        assert_eq!(audio_url("https://h/afs/", 114), "https://h/afs/114.mp3");
        assert_eq!(audio_url("https://h/afs", 999), "https://h/afs/999.mp3");
    }

    #[test]
    fn play_without_reciter_assigns_nothing() {
        let mut p = player();
        assert!(matches!(p.play(&catalog(), 1), Err(PlaybackError::NoReciter)));
        assert_eq!(p.source(), None);
        assert!(p.now_playing().is_none());
    }

    #[test]
    fn play_assigns_padded_source() {
        let mut p = player();
        assert!(p.select_reciter("1"));
        assert!(p.play(&catalog(), 1).unwrap());
        assert!(p.source().unwrap().ends_with("/afs/001.mp3"));
        assert!(p.play(&catalog(), 12).unwrap());
        assert!(p.source().unwrap().ends_with("/012.mp3"));
        assert!(!p.is_playing());
    }

    #[test]
    fn unknown_chapter_is_a_no_op() {
        let mut p = player();
        p.select_reciter("2");
        assert!(!p.play(&catalog(), 50).unwrap());
        assert_eq!(p.source(), None);
    }

    #[test]
    fn unknown_reciter_is_not_selected() {
        let mut p = player();
        assert!(!p.select_reciter("9"));
        assert!(p.selected_reciter().is_none());
    }

    #[test]
    fn transport_controls_delegate() {
        let (mut p, counters) = counted_player();
        p.select_reciter("2");
        p.play(&catalog(), 114).unwrap();
        assert_eq!(
            p.source(),
            Some("https://server8.mp3quran.net/husary/114.mp3")
        );
        p.resume().unwrap();
        assert!(p.is_playing());
        p.toggle().unwrap();
        assert!(!p.is_playing());
        p.resume().unwrap();
        assert_eq!(counters.rewinds.get(), 0);
        p.stop().unwrap();
        assert!(!p.is_playing());
        assert_eq!(counters.rewinds.get(), 1);
        assert_eq!(counters.loads.get(), 1);
    }

    #[test]
    fn replaying_loaded_chapter_keeps_position() {
        let (mut p, counters) = counted_player();
        p.select_reciter("1");
        assert!(p.play(&catalog(), 12).unwrap());
        p.resume().unwrap();
        p.pause().unwrap();
        assert!(p.play(&catalog(), 12).unwrap());
        assert_eq!(counters.loads.get(), 1);
        assert_eq!(counters.rewinds.get(), 0);

        p.select_reciter("2");
        assert!(p.play(&catalog(), 12).unwrap());
        assert_eq!(counters.loads.get(), 2);
        assert!(p.source().unwrap().ends_with("/husary/012.mp3"));
        assert!(p.play(&catalog(), 1).unwrap());
        assert_eq!(counters.loads.get(), 3);
    }

    #[test]
    fn download_needs_a_source() {
        let mut p = player();
        assert!(matches!(p.download_plan(), Err(PlaybackError::NoSource)));
        p.select_reciter("1");
        p.play(&catalog(), 12).unwrap();
        let plan = p.download_plan().unwrap();
        assert!(plan.url.ends_with("/afs/012.mp3"));
        assert_eq!(plan.file_name, "سورة سورة-12 - مشاري العفاسي.mp3");
    }
}
