//! Settings loading, normalization, and initialization
//!
//! Lookup order: `.roster/config.toml` under the working directory, then
//! `<config_dir>/roster/config.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use roster_core::prelude::*;
use roster_core::DEFAULT_PAGE_SIZE;

use super::types::{Settings, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Per-project configuration directory
pub const ROSTER_DIR: &str = ".roster";

/// Settings file name, both per-project and per-user
pub const CONFIG_FILENAME: &str = "config.toml";

const APP_DIR: &str = "roster";

/// Values supplied on the command line, applied over the file settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// Per-user settings file (`<config_dir>/roster/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// First settings file that exists, in lookup order
pub fn find_config_file(project_path: &Path) -> Option<PathBuf> {
    let project_config = project_path.join(ROSTER_DIR).join(CONFIG_FILENAME);
    std::iter::once(project_config)
        .chain(user_config_path())
        .find(|path| path.is_file())
}

/// Load settings for `project_path`, falling back to defaults
pub fn load_settings(project_path: &Path) -> Settings {
    match find_config_file(project_path) {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config file found from {:?}, using defaults", project_path);
            Settings::default()
        }
    }
}

/// Load settings from an explicit file.
///
/// A missing, unreadable, or unparsable file yields defaults. The result is
/// always normalized.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        warn!("Config file {:?} does not exist, using defaults", config_path);
        return Settings::default();
    }

    let settings = match std::fs::read_to_string(config_path) {
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
    };

    normalize_settings(settings)
}

/// Apply command-line overrides, then normalize again
pub fn apply_overrides(mut settings: Settings, overrides: &SettingsOverrides) -> Settings {
    if let Some(base_url) = &overrides.base_url {
        settings.api.base_url = base_url.clone();
    }
    if let Some(timeout_secs) = overrides.timeout_secs {
        settings.api.timeout_secs = timeout_secs;
    }
    if let Some(page_size) = overrides.page_size {
        settings.listing.page_size = page_size;
    }
    normalize_settings(settings)
}

/// Replace values the rest of the app cannot work with.
///
/// - blank base URL → default
/// - zero timeout → default
/// - empty, unsorted, or zero-containing size options → default options
/// - page size not among the options → default size, or the first option
pub fn normalize_settings(mut settings: Settings) -> Settings {
    if settings.api.base_url.trim().is_empty() {
        warn!("Empty api.base_url, using {}", DEFAULT_BASE_URL);
        settings.api.base_url = DEFAULT_BASE_URL.to_string();
    }

    if settings.api.timeout_secs == 0 {
        warn!("api.timeout_secs must be positive, using {}", DEFAULT_TIMEOUT_SECS);
        settings.api.timeout_secs = DEFAULT_TIMEOUT_SECS;
    }

    let options = &settings.listing.page_size_options;
    let ascending = options.windows(2).all(|pair| pair[0] < pair[1]);
    if options.is_empty() || !ascending || options.contains(&0) {
        warn!(
            "Invalid listing.page_size_options {:?}, using defaults",
            options
        );
        settings.listing.page_size_options = roster_core::PAGE_SIZE_OPTIONS.to_vec();
    }

    let options = &settings.listing.page_size_options;
    if !options.contains(&settings.listing.page_size) {
        let fallback = if options.contains(&DEFAULT_PAGE_SIZE) {
            DEFAULT_PAGE_SIZE
        } else {
            options[0]
        };
        warn!(
            "listing.page_size {} is not one of {:?}, using {}",
            settings.listing.page_size, options, fallback
        );
        settings.listing.page_size = fallback;
    }

    settings
}

/// Create `.roster/config.toml` with commented defaults if it is missing.
///
/// Returns the path of the settings file.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let roster_dir = project_path.join(ROSTER_DIR);

    if !roster_dir.exists() {
        std::fs::create_dir_all(&roster_dir)
            .map_err(|e| Error::config(format!("Failed to create .roster dir: {}", e)))?;
    }

    let config_path = roster_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Roster Configuration

[api]
base_url = "http://localhost:8080/api/"   # admin/users paths are resolved against this
timeout_secs = 10                          # per-request timeout

[listing]
page_size = 20                  # must be one of page_size_options
page_size_options = [5, 10, 20, 50]
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
