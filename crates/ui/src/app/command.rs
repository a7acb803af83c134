use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::search_view::{SearchScope, SearchView};

use super::types::{AudioFocus, Command, CommandOutcome, SearchCommand, Section};
use super::App;

impl Command {
    pub(super) fn from_key(app: &App, key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c')) {
            return Some(Command::Exit);
        }
        // Any key closes the overlay, like a click on its backdrop.
        if app.overlay.is_open() {
            return Some(Command::DismissOverlay);
        }
        if app.alert.is_some() {
            return matches!(key.code, KeyCode::Esc | KeyCode::Enter)
                .then_some(Command::DismissAlert);
        }
        if app.search.is_some() {
            return match key.code {
                KeyCode::Esc => Some(Command::Search(SearchCommand::Cancel)),
                KeyCode::Enter => Some(Command::Search(SearchCommand::Submit)),
                KeyCode::Backspace => Some(Command::Search(SearchCommand::Backspace)),
                KeyCode::Up => Some(Command::Search(SearchCommand::Up)),
                KeyCode::Down => Some(Command::Search(SearchCommand::Down)),
                KeyCode::Char(c) => Some(Command::Search(SearchCommand::Insert(c))),
                _ => None,
            };
        }
        if app.show_help {
            return matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Command::CloseHelp);
        }

        match key.code {
            KeyCode::Char('q') => Some(Command::Exit),
            KeyCode::Esc => Some(Command::Cancel),
            KeyCode::Enter => Some(Command::Submit),
            KeyCode::Tab => Some(Command::NextSection),
            KeyCode::BackTab => Some(Command::PrevSection),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = (c as usize) - ('1' as usize);
                Some(Command::GoTo(Section::ALL[idx]))
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Command::NavigateDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Command::NavigateUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Command::NavigateLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Command::NavigateRight),
            KeyCode::PageDown => Some(Command::PageDown),
            KeyCode::PageUp => Some(Command::PageUp),
            KeyCode::Char('/') => Some(Command::StartSearch),
            KeyCode::Char('g') => Some(Command::StartGlobalSearch),
            KeyCode::Char('p') => Some(Command::Play),
            KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Char('x') => Some(Command::Stop),
            KeyCode::Char('d') => Some(Command::Download),
            KeyCode::Char('S') => Some(Command::Share),
            KeyCode::Char('?') => Some(Command::ToggleHelp),
            _ => None,
        }
    }

    /// Commands that stand in for button presses and card clicks.
    fn is_interaction(self, app: &App) -> bool {
        match self {
            Command::Play
            | Command::TogglePause
            | Command::Stop
            | Command::Download
            | Command::Share => true,
            Command::Submit => match app.section {
                Section::Quran => true,
                Section::Audio => app.audio_focus == AudioFocus::Chapters,
                _ => false,
            },
            Command::Search(SearchCommand::Submit) => true,
            _ => false,
        }
    }
}

impl App {
    pub(super) fn apply_command(&mut self, command: Command) -> CommandOutcome {
        if command.is_interaction(self) && self.overlay.record_interaction(Instant::now()) {
            debug!(count = self.overlay.count(), "overlay opened");
        }
        match command {
            Command::Exit => return CommandOutcome::Exit,
            Command::DismissOverlay => {
                self.overlay.dismiss();
            }
            Command::DismissAlert => {
                self.alert = None;
            }
            Command::Search(search) => self.apply_search_command(search),
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Command::CloseHelp => {
                self.show_help = false;
            }
            Command::Cancel => {
                self.notice = None;
            }
            Command::NextSection => self.section = self.section.next(),
            Command::PrevSection => self.section = self.section.prev(),
            Command::GoTo(section) => self.section = section,
            Command::StartSearch => {
                self.section = Section::Quran;
                self.search = Some(SearchView::new(SearchScope::Quran));
            }
            Command::StartGlobalSearch => {
                self.search = Some(SearchView::new(SearchScope::Global));
            }
            Command::Submit => self.submit(),
            Command::NavigateUp => self.navigate(0, -1),
            Command::NavigateDown => self.navigate(0, 1),
            Command::NavigateLeft => self.navigate(-1, 0),
            Command::NavigateRight => self.navigate(1, 0),
            Command::PageDown => self.page(1),
            Command::PageUp => self.page(-1),
            Command::Play => self.play_current(),
            Command::TogglePause => self.toggle_pause(),
            Command::Stop => self.stop(),
            Command::Download => self.download(),
            Command::Share => self.share(),
        }
        CommandOutcome::Continue
    }

    fn submit(&mut self) {
        match self.section {
            Section::Quran => {
                if let Some(index) = self.catalog.chapters().get(self.grid_cursor).map(|c| c.index) {
                    self.select_chapter(index);
                }
            }
            Section::Audio => match self.audio_focus {
                AudioFocus::Reciters => {
                    let id = self
                        .player
                        .reciters()
                        .get(self.reciter_cursor)
                        .map(|r| r.id.clone());
                    if let Some(id) = id {
                        self.player.select_reciter(&id);
                        self.audio_focus = AudioFocus::Chapters;
                    }
                }
                AudioFocus::Chapters => {
                    if let Some(index) =
                        self.catalog.chapters().get(self.audio_cursor).map(|c| c.index)
                    {
                        self.play_chapter(index);
                    }
                }
            },
            Section::Prayer => {
                let code = self
                    .schedule
                    .countries()
                    .get(self.country_cursor)
                    .map(|c| c.code.clone());
                if let Some(code) = code {
                    self.schedule.show(&code);
                }
            }
            Section::Reader | Section::Azkar | Section::Hadith => {}
        }
    }

    fn navigate(&mut self, dx: isize, dy: isize) {
        let chapters = self.catalog.chapters().len();
        match self.section {
            Section::Quran => {
                let step = dx + dy * self.grid_columns.max(1) as isize;
                self.grid_cursor = step_cursor(self.grid_cursor, step, chapters);
            }
            Section::Reader => {
                self.reader_scroll = step_cursor(self.reader_scroll, dy, usize::MAX);
            }
            Section::Audio => {
                if dx < 0 {
                    self.audio_focus = AudioFocus::Reciters;
                } else if dx > 0 {
                    self.audio_focus = AudioFocus::Chapters;
                }
                match self.audio_focus {
                    AudioFocus::Reciters => {
                        let len = self.player.reciters().len();
                        self.reciter_cursor = step_cursor(self.reciter_cursor, dy, len);
                    }
                    AudioFocus::Chapters => {
                        self.audio_cursor = step_cursor(self.audio_cursor, dy, chapters);
                    }
                }
            }
            Section::Prayer => {
                let len = self.schedule.countries().len();
                self.country_cursor = step_cursor(self.country_cursor, dy, len);
            }
            Section::Azkar => {
                let len = self.azkar.entries().len();
                self.azkar_scroll = step_cursor(self.azkar_scroll, dy, len);
            }
            Section::Hadith => {
                let len = self.hadith.entries().len();
                self.hadith_scroll = step_cursor(self.hadith_scroll, dy, len);
            }
        }
    }

    fn page(&mut self, direction: isize) {
        match self.section {
            Section::Reader => {
                let half = (self.reader_height / 2).max(1) as isize;
                self.reader_scroll = step_cursor(self.reader_scroll, direction * half, usize::MAX);
            }
            _ => {
                for _ in 0..5 {
                    self.navigate(0, direction);
                }
            }
        }
    }
}

fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_clamped() {
        assert_eq!(step_cursor(0, -1, 10), 0);
        assert_eq!(step_cursor(8, 5, 10), 9);
        assert_eq!(step_cursor(3, 1, 0), 0);
        assert_eq!(step_cursor(5, -2, 10), 3);
    }
}
