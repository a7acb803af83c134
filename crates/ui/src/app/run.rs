use std::{io::stdout, time::Duration, time::Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quran_core::state::SessionRecord;
use ratatui::prelude::*;
use tracing::{debug, warn};

use super::types::{Command, CommandOutcome};
use super::App;

impl App {
    pub fn run(mut self) -> std::io::Result<SessionRecord> {
        let mut stdout = stdout();
        let raw_ok = enable_raw_mode().is_ok();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if !raw_ok {
            // Non-interactive fallback: draw once and exit cleanly
            warn!("no interactive terminal; drawing once");
            self.poll_incoming();
            let _ = terminal.draw(|f| self.draw(f));
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            return Ok(self.session_record());
        }

        let mut exit = false;
        while !exit {
            self.poll_incoming();
            if self.overlay.tick(Instant::now()) {
                debug!("overlay closed on timeout");
            }
            terminal.draw(|f| self.draw(f))?;

            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                        if let Some(command) = Command::from_key(&self, key) {
                            if self.apply_command(command) == CommandOutcome::Exit {
                                exit = true;
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {
                        exit = true;
                    }
                },
                Ok(false) => {}
                Err(_) => {
                    exit = true;
                }
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(self.session_record())
    }
}
