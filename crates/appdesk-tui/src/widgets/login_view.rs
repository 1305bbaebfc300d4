//! Login screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use appdesk_app::login::{LoginField, LoginState};

use super::modal_overlay::centered_rect;
use crate::theme::{styles, Palette};

pub struct LoginView<'a> {
    login: &'a LoginState,
    palette: &'a Palette,
}

impl<'a> LoginView<'a> {
    pub fn new(login: &'a LoginState, palette: &'a Palette) -> Self {
        Self { login, palette }
    }

    fn field_line(&self, field: LoginField, label: &'static str, value: String) -> Line<'a> {
        let p = self.palette;
        let focused = self.login.focus == field;
        let mut spans = vec![
            Span::styled(if focused { "▸ " } else { "  " }, styles::accent_bold(p)),
            Span::styled(format!("{:<10}", label), styles::text_muted(p)),
            Span::styled(value, styles::text(p)),
        ];
        if focused && !self.login.submitting {
            spans.push(Span::styled("▌", Style::default().fg(p.accent)));
        }
        Line::from(spans)
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let card = centered_rect(54, 12, area);
        let block = styles::glass_block(p, true)
            .title(" appdesk · Sign in ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        block.render(card, buf);

        let [_, email_area, password_area, _, status_area, _, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.field_line(LoginField::Email, "Email", self.login.email.clone())
            .render(email_area, buf);
        self.field_line(
            LoginField::Password,
            "Password",
            self.login.masked_password(),
        )
        .render(password_area, buf);

        let status = if self.login.submitting {
            Some(Span::styled("Signing in…", Style::default().fg(p.info)))
        } else {
            self.login
                .error
                .as_deref()
                .map(|e| Span::styled(e.to_string(), Style::default().fg(p.danger)))
        };
        if let Some(status) = status {
            Paragraph::new(Line::from(status))
                .alignment(Alignment::Center)
                .render(status_area, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled(" sign in  ", styles::text_muted(p)),
            Span::styled("Tab", styles::keybinding(p)),
            Span::styled(" switch field  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" quit", styles::text_muted(p)),
        ]))
        .alignment(Alignment::Center)
        .render(hints_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::MIDNIGHT;

    #[test]
    fn test_password_is_masked() {
        let login = LoginState {
            email: "ana@example.com".into(),
            password: "secret".into(),
            focus: LoginField::Password,
            ..LoginState::default()
        };
        let mut term = TestTerminal::new();
        let area = term.area();

        term.render_widget(LoginView::new(&login, &MIDNIGHT), area);

        assert!(term.buffer_contains("ana@example.com"));
        assert!(term.buffer_contains("••••••▌"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_error_and_progress_lines() {
        let mut login = LoginState::default();
        login.fail(None);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(LoginView::new(&login, &MIDNIGHT), area);
        assert!(term.buffer_contains("Login failed"));

        login.submitting = true;
        term.render_widget(LoginView::new(&login, &MIDNIGHT), area);
        assert!(term.buffer_contains("Signing in…"));
    }
}
