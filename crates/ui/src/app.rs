mod command;
mod draw;
mod fetch;
mod player;
mod run;
mod search;
mod state;
mod types;


pub use state::{App, Components};
pub use types::{Alert, AudioFocus, Section};
