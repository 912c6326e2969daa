//! Creation form: bordered inputs, role selector, buttons, and the notice line

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use roster_app::user_form::INVALID_EMAIL_MESSAGE;
use roster_app::{FormField, FormFocus, FormNotice, UserForm};

use crate::theme::styles;

pub const FORM_TITLE: &str = "Fill in the form";

const INPUT_HEIGHT: u16 = 3;
const CURSOR: &str = "▌";
const MASK: char = '•';

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Email => "Enter email",
        FormField::Password => "Enter password",
        FormField::FirstName => "Enter first name",
        FormField::LastName => "Enter last name",
        FormField::Role => "Select role",
    }
}

pub struct UserFormView<'a> {
    form: &'a UserForm,
}

impl<'a> UserFormView<'a> {
    pub fn new(form: &'a UserForm) -> Self {
        Self { form }
    }

    fn is_focused(&self, field: FormField) -> bool {
        self.form.focus().field() == Some(field)
    }

    fn render_input(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let focused = self.is_focused(field);
        let mut block = styles::glass_block(focused)
            .title(Line::styled(format!(" {} ", field.label()), styles::text_secondary()));
        if field == FormField::Email && !self.form.email_valid() {
            block = block.border_style(styles::status_red());
        }

        let mut spans = vec![Span::raw(" ")];
        let draft = self.form.draft();
        match (draft.text(field), draft.role) {
            (None, Some(role)) => {
                let arrows = if focused { styles::accent() } else { styles::text_muted() };
                spans.push(Span::styled("< ", arrows));
                spans.push(Span::styled(role.label(), styles::text_primary()));
                spans.push(Span::styled(" >", arrows));
            }
            (None, None) | (Some(""), _) => {
                spans.push(Span::styled(placeholder(field), styles::text_muted()));
            }
            (Some(text), _) if field == FormField::Password => {
                let masked = MASK.to_string().repeat(text.chars().count());
                spans.push(Span::styled(masked, styles::text_primary()));
            }
            (Some(text), _) => {
                spans.push(Span::styled(text.to_string(), styles::text_primary()));
            }
        }
        if focused && field.is_text() {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }

    fn buttons_line(&self) -> Line<'static> {
        let focus = self.form.focus();
        let submit_label = if self.form.is_submitting() {
            " Submitting... "
        } else {
            " Submit "
        };
        let submit_style = if focus == FormFocus::Submit {
            styles::focused_selected()
        } else if self.form.is_submitting() {
            styles::status_yellow()
        } else if self.form.is_submittable() {
            styles::accent_bold()
        } else {
            styles::disabled()
        };
        let cancel_style = if focus == FormFocus::Cancel {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };

        Line::from(vec![
            Span::raw(" "),
            bracketed(submit_label, submit_style),
            Span::raw("   "),
            bracketed(" Cancel ", cancel_style),
        ])
    }

    fn notice_line(&self) -> Option<Line<'static>> {
        let (message, style) = match self.form.notice()? {
            FormNotice::Success(message) => (message, styles::status_green()),
            FormNotice::Error(message) => (message, styles::status_red()),
        };
        Some(Line::styled(format!(" {message}"), style))
    }
}

fn bracketed(label: &'static str, style: Style) -> Span<'static> {
    Span::styled(format!("[{label}]"), style)
}

impl Widget for UserFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = styles::titled_block(FORM_TITLE, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let [email, email_hint, password, first_name, last_name, role, _, buttons, _, notice] =
            Layout::vertical([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .areas(inner);

        self.render_input(FormField::Email, email, buf);
        if !self.form.email_valid() {
            Line::styled(format!(" {INVALID_EMAIL_MESSAGE}"), styles::status_red())
                .render(email_hint, buf);
        }
        self.render_input(FormField::Password, password, buf);
        self.render_input(FormField::FirstName, first_name, buf);
        self.render_input(FormField::LastName, last_name, buf);
        self.render_input(FormField::Role, role, buf);

        self.buttons_line().render(buttons, buf);
        if let Some(line) = self.notice_line() {
            Paragraph::new(line).render(notice, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use roster_app::user_form::{FALLBACK_ERROR_MESSAGE, SUCCESS_MESSAGE};

    fn filled_form() -> UserForm {
        let mut form = UserForm::new();
        form.update_field(FormField::Email, "ada@example.com".to_string());
        form.update_field(FormField::Password, "secret".to_string());
        form.update_field(FormField::FirstName, "Ada".to_string());
        form.update_field(FormField::LastName, "Lovelace".to_string());
        form.update_field(FormField::Role, "ADMIN".to_string());
        form
    }

    fn render(form: &UserForm) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 26);
        term.render_widget(UserFormView::new(form), term.area());
        term
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let form = UserForm::new();
        let term = render(&form);

        assert!(term.line_contains(0, FORM_TITLE));
        assert!(term.buffer_contains("Enter email"));
        assert!(term.buffer_contains("Enter password"));
        assert!(term.buffer_contains("Enter first name"));
        assert!(term.buffer_contains("Enter last name"));
        assert!(term.buffer_contains("Select role"));
        assert!(term.buffer_contains("[ Submit ]"));
        assert!(term.buffer_contains("[ Cancel ]"));
        assert!(!term.buffer_contains(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_filled_form_masks_password() {
        let form = filled_form();
        let term = render(&form);

        assert!(term.buffer_contains("ada@example.com"));
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
        assert!(term.buffer_contains("< Admin >"));
        assert!(!term.buffer_contains("Select role"));
    }

    #[test]
    fn test_invalid_email_shows_hint() {
        let mut form = UserForm::new();
        form.update_field(FormField::Email, "abc".to_string());
        let term = render(&form);

        assert!(term.buffer_contains(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_submit_disabled_until_submittable() {
        let form = UserForm::new();
        let mut term = render(&form);
        let y = term.find_line("[ Submit ]").unwrap();
        let x = (0..60).find(|&x| term.buffer()[(x, y)].symbol() == "S").unwrap();
        assert_eq!(term.buffer()[(x, y)].fg, styles::disabled().fg.unwrap());

        let form = filled_form();
        term.render_widget(UserFormView::new(&form), term.area());
        let x = (0..60).find(|&x| term.buffer()[(x, y)].symbol() == "S").unwrap();
        assert_eq!(term.buffer()[(x, y)].fg, styles::accent_bold().fg.unwrap());
    }

    #[test]
    fn test_submitting_label() {
        let mut form = filled_form();
        assert!(form.submit().is_some());
        let term = render(&form);

        assert!(term.buffer_contains("Submitting..."));
    }

    #[test]
    fn test_success_notice() {
        let mut form = filled_form();
        let ticket = form.submit().unwrap();
        form.apply_created(ticket.epoch);
        let term = render(&form);

        assert!(term.buffer_contains(SUCCESS_MESSAGE));
        assert!(term.buffer_contains("Enter email"));
    }

    #[test]
    fn test_error_notice_falls_back() {
        let mut form = filled_form();
        let ticket = form.submit().unwrap();
        form.apply_failed(ticket.epoch, None);
        let term = render(&form);

        assert!(term.buffer_contains(FALLBACK_ERROR_MESSAGE));
        assert!(term.buffer_contains("ada@example.com"));
    }
}
