//! Terminal User Interface for Reviewer.
//!
//! Provides the interactive review screen:
//! - Header showing the source file and selected language
//! - Results area driven by the session view model
//! - Activity log with timestamped events
//! - Footer with keybindings

mod app;
mod events;
mod ui;

pub use app::{ActivityEntry, App};
pub use events::run;
