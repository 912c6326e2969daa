//! Roster - A terminal console for administering user accounts
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use roster_app::config::{self, Settings, SettingsOverrides};
use roster_app::Screen;
use roster_core::prelude::*;

/// Roster - A terminal console for administering user accounts
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Browse and register user accounts on a REST backend", long_about = None)]
struct Args {
    /// Backend base URL, e.g. http://localhost:8080/api/
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Users per page (one of the configured page-size options)
    #[arg(long, value_name = "N")]
    page_size: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Read settings from this file instead of the usual lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen to open on: /users or /users/add (anything else opens /users)
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    route: String,

    /// Write a default .roster/config.toml in the current directory and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            timeout_secs: self.timeout,
        }
    }

    fn initial_screen(&self) -> Screen {
        Screen::from_route(&self.route)
    }

    /// File settings with the command line applied on top
    fn settings(&self, project_path: &Path) -> Settings {
        let settings = match &self.config {
            Some(path) => config::load_settings_from(path),
            None => config::load_settings(project_path),
        };
        config::apply_overrides(settings, &self.overrides())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        let path = config::init_config_dir(&cwd)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    roster_core::logging::init().context("Failed to initialize logging")?;

    let settings = args.settings(&cwd);
    info!(
        "Settings: base_url={} page_size={} timeout={}s",
        settings.api.base_url, settings.listing.page_size, settings.api.timeout_secs
    );

    let screen = args.initial_screen();
    info!("Opening {}", screen.route());

    let result = roster_tui::run(settings, screen).await;
    if let Err(ref e) = result {
        error!("Console exited with error: {}", e);
        if e.is_fatal() {
            eprintln!("roster: {e}");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_args_map_to_overrides() {
        let args = Args::try_parse_from([
            "roster",
            "--base-url",
            "http://admin.internal/api",
            "--page-size",
            "50",
            "--timeout",
            "3",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://admin.internal/api"));
        assert_eq!(overrides.page_size, Some(50));
        assert_eq!(overrides.timeout_secs, Some(3));
        assert!(!args.init_config);
    }

    #[test]
    fn test_explicit_config_file_then_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"http://file.example/api/\"\n\n[listing]\npage_size = 10\n",
        )
        .unwrap();

        let args = Args::try_parse_from([
            "roster",
            "--config",
            path.to_str().unwrap(),
            "--page-size",
            "5",
        ])
        .unwrap();
        let settings = args.settings(dir.path());

        assert_eq!(settings.api.base_url, "http://file.example/api/");
        assert_eq!(settings.listing.page_size, 5);
    }

    #[test]
    fn test_route_selects_initial_screen() {
        let args = Args::try_parse_from(["roster"]).unwrap();
        assert_eq!(args.initial_screen(), Screen::Users);

        let args = Args::try_parse_from(["roster", "--route", "/users/add"]).unwrap();
        assert_eq!(args.initial_screen(), Screen::AddUser);

        let args = Args::try_parse_from(["roster", "--route", "/reports"]).unwrap();
        assert_eq!(args.initial_screen(), Screen::Users);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["roster", "--headless"]).is_err());
    }
}
