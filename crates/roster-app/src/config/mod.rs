//! Configuration file parsing for Roster
//!
//! Supports:
//! - `.roster/config.toml` - Per-project settings
//! - `<config_dir>/roster/config.toml` - Per-user settings

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, find_config_file, init_config_dir, load_settings, load_settings_from,
    normalize_settings, user_config_path, SettingsOverrides, CONFIG_FILENAME, ROSTER_DIR,
};
pub use types::*;
