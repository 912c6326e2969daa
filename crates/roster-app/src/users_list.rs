//! Pagination and list-state controller for the users screen
//!
//! Every mutation that changes the page or the page size issues exactly one
//! fetch, returned to the caller as a [`FetchTicket`]. Tickets carry a
//! monotonically increasing epoch; a completion is applied only when its
//! epoch is still the latest one issued, so superseded responses are dropped
//! regardless of arrival order.

use chrono::{DateTime, Local};

use roster_core::prelude::*;
use roster_core::{PageRequest, User, UserPage, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Message shown in place of the table when a page fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch users";

/// Render branch of the listing screen. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight; previously loaded users stay in state
    Loading,
    /// The latest fetch was applied
    Loaded,
    /// The latest fetch failed
    Failed { message: String },
}

/// A fetch the event loop must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub epoch: u64,
    pub request: PageRequest,
}

/// One entry of the numbered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// Zero-based page index
    pub index: usize,
    /// Whether this is the current page
    pub active: bool,
}

impl PageButton {
    /// One-based label shown to the user
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

/// State of the paginated users listing
#[derive(Debug, Clone)]
pub struct UsersList {
    current_page: usize,
    page_size: u32,
    default_page_size: u32,
    page_size_options: Vec<u32>,
    total_pages: usize,
    total_elements: u64,
    users: Vec<User>,
    status: ListStatus,
    epoch: u64,
    last_updated: Option<DateTime<Local>>,
}

impl Default for UsersList {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS.to_vec())
    }
}

impl UsersList {
    /// Create an unmounted listing that starts at `page_size`.
    ///
    /// An empty `page_size_options` falls back to the built-in options, and a
    /// `page_size` outside them falls back to the first option.
    pub fn new(page_size: u32, page_size_options: Vec<u32>) -> Self {
        let page_size_options = if page_size_options.is_empty() {
            PAGE_SIZE_OPTIONS.to_vec()
        } else {
            page_size_options
        };
        let page_size = if page_size_options.contains(&page_size) {
            page_size
        } else {
            page_size_options[0]
        };

        Self {
            current_page: 0,
            page_size,
            default_page_size: page_size,
            page_size_options,
            total_pages: 0,
            total_elements: 0,
            users: Vec::new(),
            status: ListStatus::Idle,
            epoch: 0,
            last_updated: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────

    /// Enter the screen: reset to the first page at the configured size,
    /// drop previous data, and request page 0.
    ///
    /// The epoch is kept, so responses for an earlier visit become stale.
    pub fn mount(&mut self) -> FetchTicket {
        self.current_page = 0;
        self.page_size = self.default_page_size;
        self.total_pages = 0;
        self.total_elements = 0;
        self.users.clear();
        self.status = ListStatus::Idle;
        self.last_updated = None;
        self.request_page()
    }

    /// Start a fetch for the current page and size.
    ///
    /// Users already on screen are kept until the response arrives.
    pub fn request_page(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.status = ListStatus::Loading;
        let request = PageRequest::new(self.current_page, self.page_size);
        debug!(
            "Requesting users page {} (size {}, epoch {})",
            request.page, request.size, self.epoch
        );
        FetchTicket {
            epoch: self.epoch,
            request,
        }
    }

    /// Move to page `n` (zero-based). No-op outside `[0, total_pages)` or
    /// when already there.
    pub fn go_to_page(&mut self, page: usize) -> Option<FetchTicket> {
        if page >= self.total_pages || page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.request_page())
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        let page = self.current_page.checked_sub(1)?;
        self.go_to_page(page)
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.go_to_page(self.current_page + 1)
    }

    pub fn first_page(&mut self) -> Option<FetchTicket> {
        self.go_to_page(0)
    }

    pub fn last_page(&mut self) -> Option<FetchTicket> {
        let page = self.total_pages.checked_sub(1)?;
        self.go_to_page(page)
    }

    /// Change the page size and return to the first page in one step.
    ///
    /// No-op for a size outside the options, or when neither size nor page
    /// would change.
    pub fn set_page_size(&mut self, size: u32) -> Option<FetchTicket> {
        if !self.page_size_options.contains(&size) {
            debug!("Ignoring page size {} (options {:?})", size, self.page_size_options);
            return None;
        }
        if size == self.page_size && self.current_page == 0 {
            return None;
        }
        self.page_size = size;
        self.current_page = 0;
        Some(self.request_page())
    }

    /// Step to the next (or previous) configured page size, wrapping
    pub fn cycle_page_size(&mut self, forward: bool) -> Option<FetchTicket> {
        let count = self.page_size_options.len();
        let index = self
            .page_size_options
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        self.set_page_size(self.page_size_options[next])
    }

    /// Fetch the current page again
    pub fn reload(&mut self) -> FetchTicket {
        self.request_page()
    }

    // ─────────────────────────────────────────────────────────
    // Completions
    // ─────────────────────────────────────────────────────────

    /// Apply a successful response.
    ///
    /// When the server now reports fewer pages than the current index needs,
    /// the controller moves to the last existing page and returns its fetch.
    pub fn apply_page(&mut self, epoch: u64, page: UserPage) -> PageApplied {
        if epoch != self.epoch {
            debug!(
                "Discarding stale users page (epoch {}, current {})",
                epoch, self.epoch
            );
            return PageApplied::Stale;
        }

        self.users = page.content;
        self.total_pages = page.total_pages;
        self.total_elements = page.total_elements;
        self.status = ListStatus::Loaded;
        self.last_updated = Some(Local::now());

        let last_valid = self.total_pages.max(1) - 1;
        if self.current_page > last_valid {
            info!(
                "Page {} no longer exists ({} pages), moving to page {}",
                self.current_page + 1,
                self.total_pages,
                last_valid + 1
            );
            self.current_page = last_valid;
            return PageApplied::Refetch(self.request_page());
        }

        PageApplied::Applied
    }

    /// Apply a failed response. Users from the last successful fetch stay.
    ///
    /// Returns whether the failure belonged to the latest request.
    pub fn apply_failure(&mut self, epoch: u64, error: &str) -> bool {
        if epoch != self.epoch {
            debug!(
                "Discarding stale users failure (epoch {}, current {}): {}",
                epoch, self.epoch, error
            );
            return false;
        }
        warn!("Failed to fetch users page {}: {}", self.current_page, error);
        self.status = ListStatus::Failed {
            message: FETCH_ERROR_MESSAGE.to_string(),
        };
        true
    }

    // ─────────────────────────────────────────────────────────
    // View data
    // ─────────────────────────────────────────────────────────

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[u32] {
        &self.page_size_options
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Epoch of the most recently issued request
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Local time the last page was applied
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    /// Buttons for every page in `[0, total_pages)`
    pub fn page_buttons(&self) -> Vec<PageButton> {
        (0..self.total_pages)
            .map(|index| PageButton {
                index,
                active: index == self.current_page,
            })
            .collect()
    }

    /// One-based row number, continuous across pages
    pub fn row_number(&self, index: usize) -> u64 {
        self.current_page as u64 * u64::from(self.page_size) + index as u64 + 1
    }

    /// `Page 3 of 5 (100 users)`
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} users)",
            self.current_page + 1,
            self.total_pages,
            self.total_elements
        )
    }
}

/// Outcome of [`UsersList::apply_page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageApplied {
    /// The response was current and is now on screen
    Applied,
    /// The response was superseded and changed nothing
    Stale,
    /// The response was applied but the current page no longer exists;
    /// the ticket fetches the last existing page
    Refetch(FetchTicket),
}
