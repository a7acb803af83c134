//! Background fetches. Each request runs on its own thread and reports
//! back over a channel the UI drains every frame.

use std::{
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread,
};

use tracing::{debug, error};

use crate::api::{ApiError, ScriptureSource};
use crate::download::{self, DownloadError};
use crate::reader::LoadTicket;
use crate::types::{Chapter, ChapterSummary};

#[derive(Debug, Clone)]
pub enum FetchRequest {
    Catalog,
    Chapter(LoadTicket),
    Download { url: String, path: PathBuf },
}

#[derive(Debug)]
pub enum FetchResponse {
    Catalog(Result<Vec<ChapterSummary>, ApiError>),
    Chapter(LoadTicket, Result<Chapter, ApiError>),
    Download(Result<PathBuf, DownloadError>),
}

pub struct Worker {
    source: Arc<dyn ScriptureSource>,
    tx: Sender<FetchResponse>,
}

impl Worker {
    pub fn spawn(source: Arc<dyn ScriptureSource>) -> (Self, Receiver<FetchResponse>) {
        let (tx, rx) = mpsc::channel();
        (Self { source, tx }, rx)
    }

    /// Fire and forget; the answer arrives on the receiver.
    pub fn request(&self, req: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let name = match &req {
            FetchRequest::Catalog => "fetch-catalog".to_string(),
            FetchRequest::Chapter(t) => format!("fetch-chapter-{}", t.index),
            FetchRequest::Download { .. } => "download".to_string(),
        };
        debug!(thread = %name, "spawning fetch");
        let fallback = req.clone();
        let spawned = thread::Builder::new().name(name).spawn(move || {
            let resp = run(source.as_ref(), req);
            // Receiver gone means the app is shutting down.
            let _ = tx.send(resp);
        });
        if let Err(e) = spawned {
            error!(error = %e, "failed to spawn fetch thread");
            let _ = self.tx.send(failed(fallback, e));
        }
    }
}

/// The response for a request that never got a thread, so callers waiting
/// on it are released.
fn failed(req: FetchRequest, e: std::io::Error) -> FetchResponse {
    match req {
        FetchRequest::Catalog => FetchResponse::Catalog(Err(e.into())),
        FetchRequest::Chapter(ticket) => FetchResponse::Chapter(ticket, Err(e.into())),
        FetchRequest::Download { .. } => FetchResponse::Download(Err(e.into())),
    }
}

fn run(source: &dyn ScriptureSource, req: FetchRequest) -> FetchResponse {
    match req {
        FetchRequest::Catalog => FetchResponse::Catalog(source.chapter_list()),
        FetchRequest::Chapter(ticket) => FetchResponse::Chapter(ticket, source.chapter(ticket.index)),
        FetchRequest::Download { url, path } => {
            FetchResponse::Download(download::download_to(&url, &path))
        }
    }
}
