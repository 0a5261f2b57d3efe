//! Color palette.
//!
//! Topic accent colors come from the registry; everything else is named here.

use ratatui::style::Color;
use sustrack_core::AccentColor;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent ---
pub const ACCENT: Color = Color::Green;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

/// Foreground on accent-colored backgrounds (topic pastels are all light)
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Results ---
pub const METRIC_VALUE: Color = Color::LightGreen;

/// Terminal color for a topic accent
pub fn accent_color(color: AccentColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
