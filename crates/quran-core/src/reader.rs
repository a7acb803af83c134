use tracing::{debug, error, warn};

use crate::api::ApiError;
use crate::strings;
use crate::types::Chapter;

/// Identifies one chapter-detail request. Sequence numbers only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub index: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was issued after this one; result dropped.
    Stale,
    /// The API answered with a non-200 code; nothing to show.
    Silent,
    /// Blocking alert text for the user.
    Failed(String),
}

/// Holds the single active chapter and discards out-of-order responses.
#[derive(Default)]
pub struct ChapterReader {
    next_seq: u64,
    latest: Option<LoadTicket>,
    in_flight: bool,
    active: Option<Chapter>,
}

impl ChapterReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, index: u16) -> LoadTicket {
        self.next_seq += 1;
        let ticket = LoadTicket {
            seq: self.next_seq,
            index,
        };
        self.latest = Some(ticket);
        self.in_flight = true;
        ticket
    }

    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Chapter, ApiError>,
    ) -> LoadOutcome {
        if self.latest != Some(ticket) {
            debug!(
                seq = ticket.seq,
                chapter = ticket.index,
                "discarding superseded chapter response"
            );
            return LoadOutcome::Stale;
        }
        self.in_flight = false;
        match result {
            Ok(chapter) => {
                self.active = Some(chapter);
                LoadOutcome::Applied
            }
            Err(e) if e.is_silent() => {
                warn!(chapter = ticket.index, error = %e, "chapter request returned no content");
                LoadOutcome::Silent
            }
            Err(e) => {
                error!(chapter = ticket.index, error = %e, "error loading chapter content");
                LoadOutcome::Failed(format!("{}\n{}", strings::CHAPTER_LOAD_FAILED, e.hint()))
            }
        }
    }

    pub fn active(&self) -> Option<&Chapter> {
        self.active.as_ref()
    }

    /// Chapter index of the request still awaiting a response.
    pub fn pending(&self) -> Option<u16> {
        self.latest.filter(|_| self.in_flight).map(|t| t.index)
    }
}
