//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::navigation::Screen;
use crate::user_form::UserForm;
use crate::users_list::UsersList;

/// Lifecycle of the event loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state.
///
/// Owned exclusively by the event loop; controllers are only mutated from
/// `handler::update`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Screen currently shown
    pub screen: Screen,

    /// Effective settings (file + command line)
    pub settings: Settings,

    /// Listing controller
    pub users: UsersList,

    /// Creation form controller
    pub form: UserForm,

    /// Incremented on every tick; drives the spinner animation
    pub tick_count: u64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let users = UsersList::new(
            settings.listing.page_size,
            settings.listing.page_size_options.clone(),
        );
        Self {
            phase: AppPhase::Running,
            screen: Screen::default(),
            settings,
            users,
            form: UserForm::new(),
            tick_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Backend base URL shown in the header
    pub fn base_url(&self) -> &str {
        &self.settings.api.base_url
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
