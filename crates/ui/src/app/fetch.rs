use quran_core::{
    catalog::CatalogState,
    reader::LoadOutcome,
    strings,
    worker::{FetchRequest, FetchResponse},
};
use tracing::error;

use super::types::{Alert, Section};
use super::App;

impl App {
    /// Marks the card active at once and requests the chapter. The reader
    /// takes focus; the verses appear when the response is applied.
    pub fn select_chapter(&mut self, index: u16) {
        self.catalog.mark_active(index);
        if let Some(pos) = self.catalog.position_of(index) {
            self.grid_cursor = pos;
        }
        let ticket = self.reader.begin(index);
        self.worker.request(FetchRequest::Chapter(ticket));
        self.section = Section::Reader;
    }

    pub(super) fn poll_incoming(&mut self) {
        while let Ok(resp) = self.incoming.try_recv() {
            self.handle_response(resp);
        }
    }

    pub fn handle_response(&mut self, resp: FetchResponse) {
        match resp {
            FetchResponse::Catalog(result) => {
                if self.catalog.apply_load(result) && self.catalog.state() == &CatalogState::Loaded
                {
                    if let Some(index) = self.restore_chapter.take() {
                        if self.catalog.find(index).is_some() {
                            self.catalog.mark_active(index);
                            let ticket = self.reader.begin(index);
                            self.worker.request(FetchRequest::Chapter(ticket));
                        }
                    }
                }
            }
            FetchResponse::Chapter(ticket, result) => match self.reader.complete(ticket, result) {
                LoadOutcome::Applied => {
                    self.reader_scroll = 0;
                }
                LoadOutcome::Failed(message) => {
                    self.alert = Some(Alert::new(message));
                }
                LoadOutcome::Stale | LoadOutcome::Silent => {}
            },
            FetchResponse::Download(result) => match result {
                Ok(path) => {
                    self.notice = Some(format!("{} {}", strings::DOWNLOAD_DONE, path.display()));
                }
                Err(e) => {
                    error!(error = %e, "download failed");
                    self.notice = Some(strings::DOWNLOAD_FAILED.to_string());
                }
            },
        }
    }
}
