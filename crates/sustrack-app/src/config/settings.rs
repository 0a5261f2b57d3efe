//! Settings parser for .sustrack/config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use sustrack_core::prelude::*;
use url::Url;

const CONFIG_FILENAME: &str = "config.toml";
const SUSTRACK_DIR: &str = ".sustrack";

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "SUSTRACK_API_URL";

/// Load settings from `<base_dir>/.sustrack/config.toml`, then apply
/// environment overrides.
///
/// A missing or unparseable file falls back to defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let mut settings = load_settings_file(base_dir);
    apply_env_overrides(&mut settings);
    settings
}

fn load_settings_file(base_dir: &Path) -> Settings {
    let config_path = base_dir.join(SUSTRACK_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `SUSTRACK_API_URL` on top of whatever the file said
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            debug!("Endpoint overridden by {}", ENDPOINT_ENV);
            settings.service.endpoint = endpoint.to_string();
        }
    }
}

/// Parse and validate the configured endpoint
pub fn endpoint_url(settings: &Settings) -> Result<Url> {
    let raw = settings.service.endpoint.trim();
    let url = Url::parse(raw)
        .map_err(|e| Error::config_invalid(format!("endpoint '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config_invalid(format!(
            "endpoint '{}': unsupported scheme '{}'",
            raw, other
        ))),
    }
}

/// Create `.sustrack/config.toml` with commented defaults, if absent.
///
/// Returns the config file path.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let sustrack_dir = base_dir.join(SUSTRACK_DIR);

    if !sustrack_dir.exists() {
        std::fs::create_dir_all(&sustrack_dir)
            .map_err(|e| Error::config(format!("Failed to create .sustrack dir: {}", e)))?;
    }

    let config_path = sustrack_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Sustainability Tracker Configuration

[service]
endpoint = "http://127.0.0.1:8000/calculate"   # SUSTRACK_API_URL or --api-url override this

[assets]
images_dir = "images"   # relative to the base directory

[ui]
topic_columns = 2
icons = "emoji"         # "emoji" or "ascii"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{IconMode, DEFAULT_ENDPOINT};
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_load_settings_defaults() {
        std::env::remove_var(ENDPOINT_ENV);
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_load_settings_custom() {
        std::env::remove_var(ENDPOINT_ENV);
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".sustrack");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[service]
endpoint = "https://calc.example.org/v1/calculate"

[assets]
images_dir = "art"

[ui]
topic_columns = 3
icons = "ascii"
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(
            settings.service.endpoint,
            "https://calc.example.org/v1/calculate"
        );
        assert_eq!(settings.images_dir(temp.path()), temp.path().join("art"));
        assert_eq!(settings.ui.columns(), 3);
        assert_eq!(settings.ui.icons, IconMode::Ascii);
    }

    #[test]
    #[serial]
    fn test_load_settings_invalid_toml() {
        std::env::remove_var(ENDPOINT_ENV);
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".sustrack");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "this is [not valid").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.service.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".sustrack");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            "[service]\nendpoint = \"http://file.example/calculate\"\n",
        )
        .unwrap();

        std::env::set_var(ENDPOINT_ENV, "http://env.example/calculate");
        let settings = load_settings(temp.path());
        std::env::remove_var(ENDPOINT_ENV);

        assert_eq!(settings.service.endpoint, "http://env.example/calculate");
    }

    #[test]
    #[serial]
    fn test_blank_env_is_ignored() {
        std::env::set_var(ENDPOINT_ENV, "   ");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(ENDPOINT_ENV);

        assert_eq!(settings.service.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_url_validation() {
        let mut settings = Settings::default();
        let url = endpoint_url(&settings).unwrap();
        assert_eq!(url.port(), Some(8000));
        assert_eq!(url.path(), "/calculate");

        settings.service.endpoint = "not a url".to_string();
        assert!(matches!(
            endpoint_url(&settings),
            Err(Error::ConfigInvalid { .. })
        ));

        settings.service.endpoint = "ftp://example.org/calc".to_string();
        let err = endpoint_url(&settings).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    #[serial]
    fn test_init_config_dir_writes_parseable_defaults() {
        std::env::remove_var(ENDPOINT_ENV);
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();
        assert!(path.exists());

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".sustrack");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[ui]\ntopic_columns = 1\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(dir.join("config.toml")).unwrap();
        assert_eq!(content, "[ui]\ntopic_columns = 1\n");
    }
}
