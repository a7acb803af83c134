pub mod api;
pub mod catalog;
pub mod config;
pub mod data;
pub mod download;
pub mod engagement;
pub mod layout;
pub mod media;
pub mod reader;
pub mod recitation;
pub mod references;
pub mod schedule;
pub mod share;
pub mod state;
pub mod strings;
pub mod types;
pub mod worker;

pub use layout::{verse_lines, VerseLine};
