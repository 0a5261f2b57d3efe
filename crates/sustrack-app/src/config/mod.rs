//! Configuration file parsing for Sustainability Tracker
//!
//! Supports:
//! - `.sustrack/config.toml` - Service endpoint, asset location and UI settings
//! - `SUSTRACK_API_URL` - Endpoint override from the environment

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, endpoint_url, init_config_dir, load_settings, ENDPOINT_ENV,
};
pub use types::*;
