//! Creation form controller
//!
//! Holds the draft, the email validity flag, and a single transient notice
//! (success or error). Submission hands a [`SubmitTicket`] to the caller; the
//! network result comes back through [`UserForm::apply_created`] or
//! [`UserForm::apply_failed`].

use roster_core::prelude::*;
use roster_core::{is_valid_email, meets_min_length, NewUser, Role};

/// Hint under an invalid email, also the submit guard message
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Confirmation after a successful registration
pub const SUCCESS_MESSAGE: &str = "User added successfully!";

/// Shown when the backend rejects a registration without a message
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while adding the user.";

/// Submit guard message for a draft with a short field or no role
pub const INCOMPLETE_FORM_MESSAGE: &str =
    "Please fill in every field (at least 3 characters) and pick a role.";

/// Editable fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    FirstName,
    LastName,
    Role,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::Role => "Role",
        }
    }

    /// Whether the field takes typed text
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Role)
    }
}

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Email,
    Password,
    FirstName,
    LastName,
    Role,
    Submit,
    Cancel,
}

impl FormFocus {
    const ORDER: [FormFocus; 7] = [
        FormFocus::Email,
        FormFocus::Password,
        FormFocus::FirstName,
        FormFocus::LastName,
        FormFocus::Role,
        FormFocus::Submit,
        FormFocus::Cancel,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Field under focus, `None` on the buttons
    pub fn field(self) -> Option<FormField> {
        match self {
            FormFocus::Email => Some(FormField::Email),
            FormFocus::Password => Some(FormField::Password),
            FormFocus::FirstName => Some(FormField::FirstName),
            FormFocus::LastName => Some(FormField::LastName),
            FormFocus::Role => Some(FormField::Role),
            FormFocus::Submit | FormFocus::Cancel => None,
        }
    }
}

/// Draft of a new account. Everything but the role is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// `None` is the empty selection
    pub role: Option<Role>,
}

impl UserDraft {
    /// Raw text of a text field, `None` for the role
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Email => Some(&self.email),
            FormField::Password => Some(&self.password),
            FormField::FirstName => Some(&self.first_name),
            FormField::LastName => Some(&self.last_name),
            FormField::Role => None,
        }
    }
}

/// Transient outcome of the last submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNotice {
    Success(String),
    Error(String),
}

/// A registration the event loop must send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub epoch: u64,
    pub user: NewUser,
}

/// State of the creation form
#[derive(Debug, Clone)]
pub struct UserForm {
    draft: UserDraft,
    email_valid: bool,
    notice: Option<FormNotice>,
    focus: FormFocus,
    submitting: bool,
    epoch: u64,
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            draft: UserDraft::default(),
            email_valid: true,
            notice: None,
            focus: FormFocus::default(),
            submitting: false,
            epoch: 0,
        }
    }

    /// Enter the screen with a fresh form.
    ///
    /// Bumps the epoch so a registration still in flight from an earlier
    /// visit is ignored when it completes.
    pub fn mount(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self::new();
        self.epoch = epoch;
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    /// Write `value` into `field`. Email is re-validated on every write; the
    /// raw value is stored either way. Role values are parsed as wire names
    /// and anything unknown clears the selection.
    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Email => {
                self.email_valid = is_valid_email(&value);
                self.draft.email = value;
            }
            FormField::Password => self.draft.password = value,
            FormField::FirstName => self.draft.first_name = value,
            FormField::LastName => self.draft.last_name = value,
            FormField::Role => self.draft.role = value.parse().ok(),
        }
    }

    /// Append a character to the focused text field
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focus.field().filter(FormField::is_text) else {
            return;
        };
        let mut value = self.draft.text(field).unwrap_or_default().to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.focus.field().filter(FormField::is_text) else {
            return;
        };
        let mut value = self.draft.text(field).unwrap_or_default().to_string();
        value.pop();
        self.update_field(field, value);
    }

    /// Step the role selection forward or backward
    pub fn cycle_role(&mut self, forward: bool) {
        self.draft.role = Some(if forward {
            Role::cycle_next(self.draft.role)
        } else {
            Role::cycle_prev(self.draft.role)
        });
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    // ─────────────────────────────────────────────────────────
    // Submit / cancel
    // ─────────────────────────────────────────────────────────

    /// All fields long enough, email valid, and a role picked
    pub fn is_submittable(&self) -> bool {
        meets_min_length(&self.draft.email)
            && self.email_valid
            && meets_min_length(&self.draft.password)
            && meets_min_length(&self.draft.first_name)
            && meets_min_length(&self.draft.last_name)
            && self.draft.role.is_some()
    }

    /// Try to submit the draft.
    ///
    /// An invalid email or an incomplete draft sets an error notice and sends
    /// nothing. A submit while one is in flight is ignored. Otherwise the
    /// notice is cleared and a ticket for the full draft is returned.
    pub fn submit(&mut self) -> Option<SubmitTicket> {
        if self.submitting {
            debug!("Submit ignored, registration already in flight");
            return None;
        }
        if !self.email_valid {
            self.notice = Some(FormNotice::Error(INVALID_EMAIL_MESSAGE.to_string()));
            return None;
        }
        let role = match self.draft.role {
            Some(role) if self.is_submittable() => role,
            _ => {
                debug!("Submit rejected, form incomplete");
                self.notice = Some(FormNotice::Error(INCOMPLETE_FORM_MESSAGE.to_string()));
                return None;
            }
        };

        self.notice = None;
        self.submitting = true;
        self.epoch += 1;

        let user = NewUser {
            email: self.draft.email.clone(),
            password: self.draft.password.clone(),
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            role,
        };
        debug!("Submitting registration for {} (epoch {})", user.email, self.epoch);
        Some(SubmitTicket {
            epoch: self.epoch,
            user,
        })
    }

    /// Registration succeeded: clear the draft and confirm.
    ///
    /// Returns whether the completion belonged to the current submission.
    pub fn apply_created(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.submitting {
            debug!("Discarding stale registration result (epoch {})", epoch);
            return false;
        }
        self.draft = UserDraft::default();
        self.email_valid = true;
        self.focus = FormFocus::Email;
        self.submitting = false;
        self.notice = Some(FormNotice::Success(SUCCESS_MESSAGE.to_string()));
        true
    }

    /// Registration failed: show the server message or the fallback.
    /// The draft is kept so the user can correct and resubmit.
    pub fn apply_failed(&mut self, epoch: u64, server_message: Option<String>) -> bool {
        if epoch != self.epoch || !self.submitting {
            debug!("Discarding stale registration failure (epoch {})", epoch);
            return false;
        }
        self.submitting = false;
        let message = server_message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        self.notice = Some(FormNotice::Error(message));
        true
    }

    /// Clear the draft. The notice is left as it is.
    pub fn cancel(&mut self) {
        self.draft = UserDraft::default();
        self.email_valid = true;
        self.focus = FormFocus::Email;
    }

    // ─────────────────────────────────────────────────────────
    // View data
    // ─────────────────────────────────────────────────────────

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn email_valid(&self) -> bool {
        self.email_valid
    }

    pub fn notice(&self) -> Option<&FormNotice> {
        self.notice.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.notice {
            Some(FormNotice::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.notice {
            Some(FormNotice::Success(message)) => Some(message),
            _ => None,
        }
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
