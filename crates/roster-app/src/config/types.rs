//! Configuration types for Roster
//!
//! Defines:
//! - `Settings` - Application settings (`.roster/config.toml`)
//! - `ApiSettings` - Backend location and request timeout
//! - `ListingSettings` - Page size defaults for the listing screen

use std::time::Duration;

use roster_core::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};

/// Base URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

/// Request timeout in seconds used when nothing is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application settings from `.roster/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub listing: ListingSettings,
}

/// Where the admin backend lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the `admin/users` paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Listing screen paging defaults
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListingSettings {
    /// Page size used when the listing screen is entered
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Sizes offered by the page-size selector, ascending
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<u32> {
    PAGE_SIZE_OPTIONS.to_vec()
}
