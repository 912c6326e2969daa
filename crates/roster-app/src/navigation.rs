//! Screens and routes

/// Top-level screens of the console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Paginated users listing (`/users`)
    #[default]
    Users,
    /// Creation form (`/users/add`)
    AddUser,
}

impl Screen {
    /// Sidebar order
    pub const ALL: [Screen; 2] = [Screen::Users, Screen::AddUser];

    pub fn route(&self) -> &'static str {
        match self {
            Screen::Users => "/users",
            Screen::AddUser => "/users/add",
        }
    }

    /// Resolve a route. `/` redirects to the listing and unknown routes
    /// fall back to it.
    pub fn from_route(route: &str) -> Screen {
        let trimmed = route.trim();
        let route = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match route {
            "/users/add" => Screen::AddUser,
            _ => Screen::Users,
        }
    }

    /// Sidebar entry label, also the page heading
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Users => "Users",
            Screen::AddUser => "Add user",
        }
    }
}
