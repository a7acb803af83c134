pub mod app;
pub mod clipboard;
pub mod layout;
pub mod search_view;
pub mod theme;
pub mod views;
