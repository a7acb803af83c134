use quran_core::catalog::SearchOutcome;
use quran_core::strings;

use crate::search_view::{SearchScope, SearchView};

use super::types::{Alert, SearchCommand, Section};
use super::App;

impl App {
    /// What the results panel shows for the current query.
    pub fn search_outcome(&self) -> SearchOutcome<'_> {
        match &self.search {
            Some(view) if view.scope == SearchScope::Quran => {
                self.catalog.search(view.query.trim())
            }
            _ => SearchOutcome::Hidden,
        }
    }

    fn result_count(&self) -> usize {
        match self.search_outcome() {
            SearchOutcome::Matches(found) => found.len(),
            _ => 0,
        }
    }

    pub(super) fn apply_search_command(&mut self, command: SearchCommand) {
        match command {
            SearchCommand::Cancel => {
                self.search = None;
            }
            SearchCommand::Backspace => {
                if let Some(search) = &mut self.search {
                    search.backspace();
                }
            }
            SearchCommand::Insert(c) => {
                if let Some(search) = &mut self.search {
                    search.push_char(c);
                }
            }
            SearchCommand::Up => {
                if let Some(search) = &mut self.search {
                    search.up();
                }
            }
            SearchCommand::Down => {
                let count = self.result_count();
                if let Some(search) = &mut self.search {
                    search.down(count);
                }
            }
            SearchCommand::Submit => {
                let Some(scope) = self.search.as_ref().map(|v| v.scope) else {
                    return;
                };
                match scope {
                    SearchScope::Global => self.submit_global(),
                    SearchScope::Quran => self.submit_quran(),
                }
            }
        }
    }

    fn submit_global(&mut self) {
        let query = self
            .search
            .as_ref()
            .map(|v| v.query.trim().to_string())
            .unwrap_or_default();
        if query.is_empty() {
            self.search = None;
            self.alert = Some(Alert::new(strings::EMPTY_GLOBAL_QUERY));
            return;
        }
        self.section = Section::Quran;
        self.search = Some(SearchView::with_query(SearchScope::Quran, &query));
    }

    /// Opens the highlighted match, then hides the panel and clears the
    /// query. Without matches the panel stays open.
    fn submit_quran(&mut self) {
        let selected = self.search.as_ref().map(|v| v.selected).unwrap_or(0);
        let target = match self.search_outcome() {
            SearchOutcome::Matches(found) => found
                .get(selected)
                .or_else(|| found.first())
                .map(|c| c.index),
            _ => None,
        };
        if let Some(index) = target {
            self.search = None;
            self.select_chapter(index);
        }
    }
}
