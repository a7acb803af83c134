use tracing::{debug, error, info};

use crate::api::{ApiError, ScriptureSource};
use crate::strings;
use crate::types::ChapterSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Loaded,
    /// Localized message shown in place of the grid.
    Failed(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Blank query: the results panel stays closed.
    Hidden,
    NoResults,
    Matches(Vec<&'a ChapterSummary>),
}

/// The chapter list for the session. Filled once and never mutated after.
pub struct ScriptureCatalog {
    chapters: Vec<ChapterSummary>,
    state: CatalogState,
    active: Option<u16>,
}

impl Default for ScriptureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptureCatalog {
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
            state: CatalogState::Loading,
            active: None,
        }
    }

    pub fn load_catalog(&mut self, source: &dyn ScriptureSource) -> bool {
        self.apply_load(source.chapter_list())
    }

    /// Store the outcome of a chapter-list fetch. Returns `true` when the
    /// grids need rendering.
    pub fn apply_load(&mut self, result: Result<Vec<ChapterSummary>, ApiError>) -> bool {
        if self.state == CatalogState::Loaded {
            debug!("catalog already loaded; ignoring repeated load");
            return false;
        }
        match result {
            Ok(chapters) => {
                info!(count = chapters.len(), "catalog loaded");
                self.chapters = chapters;
                self.state = CatalogState::Loaded;
            }
            Err(e) => {
                error!(error = %e, "error loading chapter list");
                self.chapters.clear();
                self.state = CatalogState::Failed(strings::CATALOG_LOAD_FAILED.to_string());
            }
        }
        true
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn chapters(&self) -> &[ChapterSummary] {
        &self.chapters
    }

    pub fn find(&self, index: u16) -> Option<&ChapterSummary> {
        self.chapters.iter().find(|c| c.index == index)
    }

    pub fn position_of(&self, index: u16) -> Option<usize> {
        self.chapters.iter().position(|c| c.index == index)
    }

    pub fn mark_active(&mut self, index: u16) {
        self.active = Some(index);
    }

    pub fn active(&self) -> Option<u16> {
        self.active
    }

    /// Case-sensitive on the native name, case-insensitive on the
    /// transliterated name; results keep list order.
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        if query.trim().is_empty() {
            return SearchOutcome::Hidden;
        }
        let lowered = query.to_lowercase();
        let matches: Vec<&ChapterSummary> = self
            .chapters
            .iter()
            .filter(|c| c.name.contains(query) || c.english_name.to_lowercase().contains(&lowered))
            .collect();
        if matches.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Matches(matches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RevelationPlace;

    fn summary(index: u16, name: &str, english: &str) -> ChapterSummary {
        ChapterSummary {
            index,
            name: name.to_string(),
            english_name: english.to_string(),
            english_translation: String::new(),
            verse_count: 10,
            revelation_place: RevelationPlace::Meccan,
        }
    }

    fn loaded() -> ScriptureCatalog {
        let mut catalog = ScriptureCatalog::new();
        catalog.apply_load(Ok(vec![
            summary(1, "الفاتحة", "Al-Faatiha"),
            summary(2, "البقرة", "Al-Baqara"),
            summary(3, "آل عمران", "Aal-i-Imraan"),
            summary(108, "الكوثر", "Al-Kawthar"),
        ]));
        catalog
    }

    fn indices(outcome: SearchOutcome<'_>) -> Vec<u16> {
        match outcome {
            SearchOutcome::Matches(m) => m.iter().map(|c| c.index).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn blank_queries_hide_results() {
        let catalog = loaded();
        assert_eq!(catalog.search(""), SearchOutcome::Hidden);
        assert_eq!(catalog.search("   \t"), SearchOutcome::Hidden);
    }

    #[test]
    fn transliterated_match_ignores_case_and_keeps_order() {
        let catalog = loaded();
        assert_eq!(indices(catalog.search("al-")), vec![1, 2, 3, 108]);
        assert_eq!(indices(catalog.search("AL-K")), vec![108]);
        assert_eq!(indices(catalog.search("BAQ")), vec![2]);
    }

    #[test]
    fn native_match_is_substring() {
        let catalog = loaded();
        assert_eq!(indices(catalog.search("عمران")), vec![3]);
        assert_eq!(indices(catalog.search("ال")), vec![1, 2, 108]);
    }

    #[test]
    fn no_match_reports_no_results() {
        let catalog = loaded();
        assert_eq!(catalog.search("zzz"), SearchOutcome::NoResults);
    }

    #[test]
    fn failed_load_leaves_only_the_error() {
        let mut catalog = ScriptureCatalog::new();
        assert!(catalog.apply_load(Err(ApiError::Empty)));
        assert!(catalog.chapters().is_empty());
        assert_eq!(
            catalog.state(),
            &CatalogState::Failed(strings::CATALOG_LOAD_FAILED.to_string())
        );
    }

    #[test]
    fn loaded_list_is_not_replaced() {
        let mut catalog = loaded();
        assert!(!catalog.apply_load(Ok(vec![summary(9, "x", "y")])));
        assert!(!catalog.apply_load(Err(ApiError::Empty)));
        assert_eq!(catalog.chapters().len(), 4);
        assert_eq!(catalog.state(), &CatalogState::Loaded);
    }
}
