//! Configuration types for `.sustrack/config.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Endpoint used when neither the config file, the environment nor the CLI names one
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/calculate";

/// Application settings (.sustrack/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Absolute directory the topic images are resolved against
    pub fn images_dir(&self, base_dir: &Path) -> PathBuf {
        if self.assets.images_dir.is_absolute() {
            self.assets.images_dir.clone()
        } else {
            base_dir.join(&self.assets.images_dir)
        }
    }
}

/// Calculation service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Full URL the activity record is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Image asset settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Image directory, relative to the base directory unless absolute
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
        }
    }
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

/// Icon rendering mode for the TUI.
///
/// Emoji headings are the default, but some terminals render them
/// at the wrong width; `ascii` avoids that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Emoji,
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Emoji => write!(f, "emoji"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Number of columns in the topic grid (clamped to 1..=4)
    #[serde(default = "default_topic_columns")]
    pub topic_columns: u16,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            topic_columns: default_topic_columns(),
            icons: IconMode::default(),
        }
    }
}

impl UiSettings {
    pub fn columns(&self) -> usize {
        usize::from(self.topic_columns.clamp(1, 4))
    }
}

fn default_topic_columns() -> u16 {
    2
}
