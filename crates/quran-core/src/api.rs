mod error;
mod http;
mod wire;

pub use error::ApiError;
pub use http::HttpSource;
pub use wire::{parse_chapter, parse_chapter_list};

use crate::types::{Chapter, ChapterSummary};

pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_EDITION: &str = "ar.alafasy";

/// Where chapter data comes from. Implementations are shared with worker
/// threads, so they must be `Send + Sync`.
pub trait ScriptureSource: Send + Sync {
    fn chapter_list(&self) -> Result<Vec<ChapterSummary>, ApiError>;
    fn chapter(&self, index: u16) -> Result<Chapter, ApiError>;
}
