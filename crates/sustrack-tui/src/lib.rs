//! sustrack-tui - Terminal UI for Sustainability Tracker
//!
//! Renders [`sustrack_app::AppState`] with ratatui, converts crossterm key
//! events into [`sustrack_app::InputKey`], and drives the TEA loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
