//! UI layer for the desktop GUI: the app shell and its theme settings.

pub mod app;
pub mod theme;

pub use app::MonsterTrackerApp;
