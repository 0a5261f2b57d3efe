//! Topic registry - the static set of sustainability topics shown in the browser
//!
//! The registry is built once at startup and never mutated. Order matters:
//! the browser grid and keyboard navigation both follow registry order.

use std::fmt;
use std::path::{Path, PathBuf};

/// RGB accent color attached to a topic card.
///
/// Kept independent of any terminal library; the TUI converts it to its
/// own color type at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) token
    pub fn from_hex(token: &str) -> Option<Self> {
        let hex = token.strip_prefix('#').unwrap_or(token);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A named sustainability category with its display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Unique display name, also the registry key
    pub name: String,
    /// Primary image, shown on the card and in the detail view
    pub image: PathBuf,
    /// Secondary image, shown next to the primary one in the detail view
    pub extra_image: PathBuf,
    pub description: String,
    pub color: AccentColor,
}

/// Built-in topic content: (name, image, extra image, color, description)
const BUILTIN_TOPICS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Carbon Footprint",
        "carbon_footprint.png",
        "carbon_extra.png",
        "#FFADAD",
        "🌍 Tracks CO₂ from driving, electricity, diet, and waste using Azure AI and ML.",
    ),
    (
        "Water Usage",
        "water_usage.png",
        "water_extra.png",
        "#ADE8F4",
        "💧 Tracks water consumption and provides actionable recommendations.",
    ),
    (
        "Energy Saving",
        "energy_saving.png",
        "energy_extra.png",
        "#FFD6A5",
        "💡 Monitors electricity usage and suggests energy-efficient habits.",
    ),
    (
        "Waste Management",
        "waste_management.png",
        "waste_extra.png",
        "#CAFFBF",
        "♻️ Helps minimize waste and supports recycling and composting practices.",
    ),
];

/// Fallback when a built-in color token fails to parse
const DEFAULT_ACCENT: AccentColor = AccentColor::new(0xCC, 0xCC, 0xCC);

/// Ordered, read-only mapping from topic name to [`Topic`]
#[derive(Debug, Clone, Default)]
pub struct TopicRegistry {
    topics: Vec<Topic>,
}

impl TopicRegistry {
    /// Build the registry from an explicit topic list.
    ///
    /// Later duplicates of an existing name are dropped so names stay unique.
    pub fn new(topics: impl IntoIterator<Item = Topic>) -> Self {
        let mut unique: Vec<Topic> = Vec::new();
        for topic in topics {
            if unique.iter().any(|t| t.name == topic.name) {
                tracing::warn!("Duplicate topic '{}' ignored", topic.name);
                continue;
            }
            unique.push(topic);
        }
        Self { topics: unique }
    }

    /// The built-in topics with image paths resolved under `images_dir`
    pub fn builtin(images_dir: &Path) -> Self {
        Self::new(
            BUILTIN_TOPICS
                .iter()
                .map(|(name, image, extra, color, description)| Topic {
                    name: (*name).to_string(),
                    image: images_dir.join(image),
                    extra_image: images_dir.join(extra),
                    description: (*description).to_string(),
                    color: AccentColor::from_hex(color).unwrap_or(DEFAULT_ACCENT),
                }),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Topic at a registry position (used by the grid cursor)
    pub fn get_index(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
