//! Sustainability Tracker Library
//!
//! Ties the workspace crates together for the `sustrack` binary: argument
//! parsing, settings resolution, and the headless NDJSON mode.

pub mod cli;
pub mod headless;

use std::path::Path;

use sustrack_app::config::{load_settings, Settings};

// Re-export main entry points
pub use cli::{ActivityArgs, Args};
pub use headless::run_headless;
pub use sustrack_tui::run as run_tui;

/// Load settings for `base_dir` and apply the CLI endpoint override.
///
/// Priority: `--api-url` > `SUSTRACK_API_URL` > config file > default.
pub fn resolve_settings(base_dir: &Path, api_url: Option<&str>) -> Settings {
    let mut settings = load_settings(base_dir);
    if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
        tracing::debug!("Endpoint overridden on the command line: {}", url);
        settings.service.endpoint = url.to_string();
    }
    settings
}
