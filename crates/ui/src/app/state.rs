use std::{
    path::PathBuf,
    sync::{mpsc::Receiver, Arc},
};

use quran_core::{
    api::ScriptureSource,
    catalog::ScriptureCatalog,
    data::DataStore,
    engagement::EngagementOverlay,
    reader::ChapterReader,
    recitation::RecitationPlayer,
    references::ReferenceTextManager,
    schedule::ScheduleTable,
    share::ShareFacilitator,
    state::SessionRecord,
    types::ReferenceKind,
    worker::{FetchRequest, FetchResponse, Worker},
};
use tracing::info;

use crate::{search_view::SearchView, theme::Theme};

use super::types::{Alert, AudioFocus, Section};

/// Everything the app needs from outside, built once by the binary.
pub struct Components {
    pub source: Arc<dyn ScriptureSource>,
    pub player: RecitationPlayer,
    pub schedule: ScheduleTable,
    pub overlay: EngagementOverlay,
    pub overlay_message: String,
    pub share: ShareFacilitator,
    pub download_dir: PathBuf,
    pub theme: Theme,
}

pub struct App {
    pub section: Section,
    pub catalog: ScriptureCatalog,
    pub reader: ChapterReader,
    pub player: RecitationPlayer,
    pub schedule: ScheduleTable,
    pub azkar: ReferenceTextManager,
    pub hadith: ReferenceTextManager,
    pub overlay: EngagementOverlay,
    pub overlay_message: String,
    pub share: ShareFacilitator,
    pub theme: Theme,
    pub download_dir: PathBuf,
    pub worker: Worker,
    pub incoming: Receiver<FetchResponse>,
    pub search: Option<SearchView>,
    pub alert: Option<Alert>,
    pub notice: Option<String>,
    pub show_help: bool,
    pub grid_cursor: usize,
    pub grid_columns: usize,
    pub reader_scroll: usize,
    pub reader_height: usize,
    pub audio_focus: AudioFocus,
    pub reciter_cursor: usize,
    pub audio_cursor: usize,
    pub country_cursor: usize,
    pub azkar_scroll: usize,
    pub hadith_scroll: usize,
    /// Chapter to reopen once the catalog arrives.
    pub restore_chapter: Option<u16>,
}

impl App {
    pub fn new(components: Components) -> Self {
        let Components {
            source,
            player,
            schedule,
            overlay,
            overlay_message,
            share,
            download_dir,
            theme,
        } = components;
        let (worker, incoming) = Worker::spawn(source);
        let country_cursor = schedule
            .countries()
            .iter()
            .position(|c| c.code == schedule.current_code())
            .unwrap_or(0);
        Self {
            section: Section::Quran,
            catalog: ScriptureCatalog::new(),
            reader: ChapterReader::new(),
            player,
            schedule,
            azkar: ReferenceTextManager::new(ReferenceKind::Azkar),
            hadith: ReferenceTextManager::new(ReferenceKind::Hadith),
            overlay,
            overlay_message,
            share,
            theme,
            download_dir,
            worker,
            incoming,
            search: None,
            alert: None,
            notice: None,
            show_help: false,
            grid_cursor: 0,
            grid_columns: 1,
            reader_scroll: 0,
            reader_height: 0,
            audio_focus: AudioFocus::Reciters,
            reciter_cursor: 0,
            audio_cursor: 0,
            country_cursor,
            azkar_scroll: 0,
            hadith_scroll: 0,
            restore_chapter: None,
        }
    }

    /// Kicks off the catalog fetch and fills the static sections.
    pub fn start(&mut self, store: &DataStore) {
        self.worker.request(FetchRequest::Catalog);
        self.azkar.load_all(store);
        self.hadith.load_all(store);
    }

    pub fn restore(&mut self, record: SessionRecord) {
        if let Some(country) = record.country.as_deref() {
            self.schedule.show(country);
            self.sync_country_cursor();
        }
        if let Some(id) = record.reciter.as_deref() {
            if self.player.select_reciter(id) {
                self.reciter_cursor = self
                    .player
                    .reciters()
                    .iter()
                    .position(|r| r.id == id)
                    .unwrap_or(0);
            }
        }
        self.restore_chapter = record.last_chapter;
        info!(chapter = ?record.last_chapter, "session restored");
    }

    pub fn session_record(&self) -> SessionRecord {
        SessionRecord {
            last_chapter: self
                .reader
                .active()
                .map(|c| c.summary.index)
                .or(self.catalog.active())
                .or(self.restore_chapter),
            reciter: self.player.selected_reciter().map(|r| r.id.clone()),
            country: Some(self.schedule.current_code().to_string()),
            saved_at: String::new(),
        }
        .stamped()
    }

    pub(super) fn sync_country_cursor(&mut self) {
        let code = self.schedule.current_code();
        if let Some(pos) = self.schedule.countries().iter().position(|c| c.code == code) {
            self.country_cursor = pos;
        }
    }
}
