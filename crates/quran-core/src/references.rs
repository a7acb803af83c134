use tracing::{error, info};

use crate::data::DataStore;
use crate::types::{ReferenceKind, ReferenceText};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceState {
    Empty,
    Loaded,
    Failed(String),
}

/// Azkar or hadith list, rendered verbatim.
pub struct ReferenceTextManager {
    kind: ReferenceKind,
    entries: Vec<ReferenceText>,
    state: ReferenceState,
}

impl ReferenceTextManager {
    pub fn new(kind: ReferenceKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            state: ReferenceState::Empty,
        }
    }

    pub fn load_all(&mut self, store: &DataStore) {
        match store.references(self.kind) {
            Ok(entries) => {
                info!(kind = ?self.kind, count = entries.len(), "reference texts loaded");
                self.entries = entries;
                self.state = ReferenceState::Loaded;
            }
            Err(e) => {
                error!(kind = ?self.kind, error = %e, "error loading reference texts");
                self.entries.clear();
                self.state = ReferenceState::Failed(self.kind.load_failed_message().to_string());
            }
        }
    }

    pub fn entries(&self) -> &[ReferenceText] {
        &self.entries
    }

    pub fn state(&self) -> &ReferenceState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings;

    #[test]
    fn loads_every_embedded_entry() {
        let mut azkar = ReferenceTextManager::new(ReferenceKind::Azkar);
        azkar.load_all(&DataStore::embedded());
        assert_eq!(azkar.state(), &ReferenceState::Loaded);
        assert_eq!(azkar.entries().len(), 4);
        assert_eq!(azkar.entries()[3].citation, "سيد الاستغفار");
    }

    #[test]
    fn broken_override_shows_localized_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hadith.toml"), "entry = 3").unwrap();
        let mut hadith = ReferenceTextManager::new(ReferenceKind::Hadith);
        hadith.load_all(&DataStore::with_overrides(dir.path()));
        assert!(hadith.entries().is_empty());
        assert_eq!(
            hadith.state(),
            &ReferenceState::Failed(strings::HADITH_LOAD_FAILED.to_string())
        );
    }
}
