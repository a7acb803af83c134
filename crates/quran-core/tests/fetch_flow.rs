use std::{
    sync::{mpsc::Receiver, Arc},
    thread,
    time::Duration,
};

use quran_core::api::{ApiError, ScriptureSource};
use quran_core::catalog::{CatalogState, ScriptureCatalog, SearchOutcome};
use quran_core::reader::{ChapterReader, LoadOutcome};
use quran_core::strings;
use quran_core::types::{Chapter, ChapterSummary, RevelationPlace, Verse};
use quran_core::worker::{FetchRequest, FetchResponse, Worker};

fn summary(index: u16, name: &str, english: &str) -> ChapterSummary {
    ChapterSummary {
        index,
        name: name.to_string(),
        english_name: english.to_string(),
        english_translation: String::new(),
        verse_count: 3,
        revelation_place: RevelationPlace::Meccan,
    }
}

/// Serves a fixed list; chapter 2 answers slower than the others.
struct SlowSecond {
    fail_list: bool,
}

impl ScriptureSource for SlowSecond {
    fn chapter_list(&self) -> Result<Vec<ChapterSummary>, ApiError> {
        if self.fail_list {
            return Err(ApiError::Empty);
        }
        Ok(vec![
            summary(1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha"),
            summary(2, "سُورَةُ البَقَرَةِ", "Al-Baqara"),
            summary(3, "سُورَةُ آلِ عِمۡرَانَ", "Aal-i-Imraan"),
        ])
    }

    fn chapter(&self, index: u16) -> Result<Chapter, ApiError> {
        if index == 2 {
            thread::sleep(Duration::from_millis(200));
        }
        if index == 99 {
            return Err(ApiError::Status(404));
        }
        Ok(Chapter {
            summary: summary(index, "x", "x"),
            verses: vec![Verse {
                text: format!("verse of {index}"),
                position: 1,
            }],
        })
    }
}

fn recv(rx: &Receiver<FetchResponse>) -> FetchResponse {
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

#[test]
fn catalog_loads_through_worker() {
    let (worker, rx) = Worker::spawn(Arc::new(SlowSecond { fail_list: false }));
    let mut catalog = ScriptureCatalog::new();
    worker.request(FetchRequest::Catalog);
    match recv(&rx) {
        FetchResponse::Catalog(result) => assert!(catalog.apply_load(result)),
        other => panic!("unexpected response: {other:?}"),
    }
    assert_eq!(catalog.state(), &CatalogState::Loaded);
    assert_eq!(catalog.chapters().len(), 3);
    match catalog.search("baq") {
        SearchOutcome::Matches(found) => assert_eq!(found[0].index, 2),
        other => panic!("unexpected search outcome: {other:?}"),
    }
}

#[test]
fn failed_catalog_shows_only_the_message() {
    let mut catalog = ScriptureCatalog::new();
    assert!(catalog.load_catalog(&SlowSecond { fail_list: true }));
    assert!(catalog.chapters().is_empty());
    assert_eq!(
        catalog.state(),
        &CatalogState::Failed(strings::CATALOG_LOAD_FAILED.to_string())
    );
}

#[test]
fn slow_older_chapter_never_replaces_newer() {
    let (worker, rx) = Worker::spawn(Arc::new(SlowSecond { fail_list: false }));
    let mut reader = ChapterReader::new();
    let slow = reader.begin(2);
    worker.request(FetchRequest::Chapter(slow));
    let fast = reader.begin(3);
    worker.request(FetchRequest::Chapter(fast));

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        match recv(&rx) {
            FetchResponse::Chapter(ticket, result) => {
                outcomes.push((ticket.index, reader.complete(ticket, result)))
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
    assert_eq!(outcomes, vec![(3, LoadOutcome::Applied), (2, LoadOutcome::Stale)]);
    assert_eq!(reader.active().map(|c| c.summary.index), Some(3));
    assert_eq!(reader.pending(), None);
}

#[test]
fn api_code_failure_is_silent() {
    let (worker, rx) = Worker::spawn(Arc::new(SlowSecond { fail_list: false }));
    let mut reader = ChapterReader::new();
    let ticket = reader.begin(99);
    worker.request(FetchRequest::Chapter(ticket));
    match recv(&rx) {
        FetchResponse::Chapter(t, result) => {
            assert_eq!(reader.complete(t, result), LoadOutcome::Silent)
        }
        other => panic!("unexpected response: {other:?}"),
    }
    assert!(reader.active().is_none());
}
