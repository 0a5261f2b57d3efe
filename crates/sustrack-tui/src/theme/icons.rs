//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`:
//! - `IconMode::Emoji`: the emoji used in headings and hints
//! - `IconMode::Ascii`: plain fallbacks for terminals that mis-measure emoji

use sustrack_app::config::IconMode;

/// Braille spinner frames, advanced once per tick
const SPINNER_UNICODE: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn seedling(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🌱",
            IconMode::Ascii => "*",
        }
    }

    /// Category-wise breakdown heading
    pub fn leaf(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🌿",
            IconMode::Ascii => "#",
        }
    }

    /// Total heading
    pub fn globe(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🌍",
            IconMode::Ascii => "#",
        }
    }

    /// Per-category recommendations heading
    pub fn bulb(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "💡",
            IconMode::Ascii => "#",
        }
    }

    /// Overall recommendation heading
    pub fn memo(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📝",
            IconMode::Ascii => "#",
        }
    }

    pub fn back(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "⬅",
            IconMode::Ascii => "<-",
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🖼",
            IconMode::Ascii => "[img]",
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "⚠",
            IconMode::Ascii => "!",
        }
    }

    pub fn spinner(&self, tick: u64) -> &'static str {
        let frames: &[&'static str] = match self.mode {
            IconMode::Emoji => &SPINNER_UNICODE,
            IconMode::Ascii => &SPINNER_ASCII,
        };
        frames[(tick % frames.len() as u64) as usize]
    }
}
