use std::time::Instant;

use quran_core::engagement::OverlayState;
use ratatui::prelude::*;

use crate::views::{self, AudioPanes};

use super::types::{AudioFocus, Section};
use super::App;

impl App {
    pub(super) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(size);

        let titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
        views::render_tabs(f, chunks[0], &titles, self.section.position(), &self.theme);

        let body = chunks[1];
        match self.section {
            Section::Quran => {
                self.grid_columns =
                    views::render_catalog(f, body, &self.catalog, self.grid_cursor, &self.theme);
            }
            Section::Reader => {
                let (scroll, height) =
                    views::render_reader(f, body, &self.reader, self.reader_scroll, &self.theme);
                self.reader_scroll = scroll;
                self.reader_height = height;
            }
            Section::Audio => {
                AudioPanes {
                    player: &self.player,
                    catalog: &self.catalog,
                    reciters_focused: self.audio_focus == AudioFocus::Reciters,
                    reciter_cursor: self.reciter_cursor,
                    chapter_cursor: self.audio_cursor,
                }
                .render(f, body, &self.theme);
            }
            Section::Prayer => {
                views::render_prayer(f, body, &self.schedule, self.country_cursor, &self.theme);
            }
            Section::Azkar => views::render_references(
                f,
                body,
                Section::Azkar.title(),
                &self.azkar,
                self.azkar_scroll,
                &self.theme,
            ),
            Section::Hadith => views::render_references(
                f,
                body,
                Section::Hadith.title(),
                &self.hadith,
                self.hadith_scroll,
                &self.theme,
            ),
        }

        let left = self.notice.clone().unwrap_or_else(|| "? help".to_string());
        let right = match self.player.now_playing() {
            Some(n) => {
                let state = if self.player.is_playing() { "▶" } else { "⏸" };
                format!("{} {} · {}", state, n.chapter_label(), n.reciter_label())
            }
            None => String::new(),
        };
        views::render_status(f, chunks[2], &left, &right, &self.theme);

        if let Some(search) = &self.search {
            search.render(f, size, &self.search_outcome(), &self.theme);
        }
        if self.show_help {
            views::render_help(f, size);
        }
        if let Some(alert) = &self.alert {
            views::render_alert(f, size, alert.title.as_deref(), &alert.body);
        }
        if let OverlayState::Open { deadline } = self.overlay.state() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            views::render_overlay(
                f,
                size,
                &self.overlay_message,
                remaining.as_secs() + 1,
                &self.theme,
            );
        }
    }
}
