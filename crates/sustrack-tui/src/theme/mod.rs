//! Centralized theme for the tracker TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: emoji glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
