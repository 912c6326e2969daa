//! Custom widget components

mod footer;
mod header;
mod pagination;
mod sidebar;
mod spinner;
mod user_form;
mod users_table;

pub use footer::{key_hints, Footer};
pub use header::{MainHeader, APP_TITLE};
pub use pagination::{visible_range, Pagination, PAGINATION_HEIGHT};
pub use sidebar::Sidebar;
pub use spinner::Spinner;
pub use user_form::{UserFormView, FORM_TITLE};
pub use users_table::{UsersTable, COLUMNS};
