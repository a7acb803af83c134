use quran_core::catalog::SearchOutcome;
use quran_core::strings;
use ratatui::{prelude::*, widgets::*};
use unicode_segmentation::UnicodeSegmentation;

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchScope {
    /// Filters the chapter catalog while typing.
    Quran,
    /// Header search box; submits into the Quran search.
    Global,
}

pub struct SearchView {
    pub query: String,
    pub scope: SearchScope,
    pub selected: usize,
}

impl SearchView {
    pub fn new(scope: SearchScope) -> Self {
        Self {
            query: String::new(),
            scope,
            selected: 0,
        }
    }

    pub fn with_query(scope: SearchScope, query: &str) -> Self {
        Self {
            query: query.to_string(),
            scope,
            selected: 0,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.query.push(c);
            self.selected = 0;
        }
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.query.grapheme_indices(true).last() {
            self.query.truncate(idx);
            self.selected = 0;
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self, results: usize) {
        if results > 0 {
            self.selected = (self.selected + 1).min(results - 1);
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, outcome: &SearchOutcome<'_>, theme: &Theme) {
        let mut width = ((area.width as f32) * 0.6) as u16;
        width = width.max(20).min(area.width.saturating_sub(2).max(1)); // keep borders visible
        let results_height = match outcome {
            SearchOutcome::Hidden => 0,
            SearchOutcome::NoResults => 3,
            SearchOutcome::Matches(found) => (found.len() as u16 + 2).min(12),
        };
        let height = (3 + results_height).min(area.height.max(3));
        let popup_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 3,
            width,
            height,
        };
        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(popup_area);
        let title = match self.scope {
            SearchScope::Quran => "Search chapters (Enter open, Esc cancel)",
            SearchScope::Global => "Search (Enter submit, Esc cancel)",
        };
        let prompt = Paragraph::new(format!("> {}", self.query))
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(prompt, chunks[0]);

        match outcome {
            SearchOutcome::Hidden => {}
            SearchOutcome::NoResults => {
                let empty = Paragraph::new(strings::NO_RESULTS)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(empty, chunks[1]);
            }
            SearchOutcome::Matches(found) => {
                let items: Vec<ListItem> = found
                    .iter()
                    .map(|c| {
                        ListItem::new(Line::from(format!(
                            "{:>3}  {}  {}",
                            c.index,
                            c.name,
                            c.english_label()
                        )))
                    })
                    .collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL))
                    .highlight_style(Style::default().bg(theme.accent).fg(Color::Black));
                let mut state = ListState::default();
                state.select(Some(self.selected.min(found.len().saturating_sub(1))));
                f.render_stateful_widget(list, chunks[1], &mut state);
            }
        }
    }
}
