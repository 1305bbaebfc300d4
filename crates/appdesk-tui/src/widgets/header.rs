//! Header bar widget
//!
//! Shows the app title, the active page, the signed-in user and the sync
//! status.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use appdesk_core::User;

use crate::theme::{styles, Palette};

pub struct MainHeader<'a> {
    page_title: &'a str,
    user: Option<&'a User>,
    is_admin: bool,
    sync_label: String,
    refreshing: bool,
    pending: bool,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(page_title: &'a str, palette: &'a Palette) -> Self {
        Self {
            page_title,
            user: None,
            is_admin: false,
            sync_label: String::new(),
            refreshing: false,
            pending: false,
            palette,
        }
    }

    pub fn user(mut self, user: Option<&'a User>, is_admin: bool) -> Self {
        self.user = user;
        self.is_admin = is_admin;
        self
    }

    pub fn sync(mut self, label: String, refreshing: bool, pending: bool) -> Self {
        self.sync_label = label;
        self.refreshing = refreshing;
        self.pending = pending;
        self
    }

    fn status_spans(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let mut spans = Vec::new();

        if self.pending {
            spans.push(Span::styled("● pending  ", Style::default().fg(p.warning)));
        }
        if self.refreshing {
            spans.push(Span::styled("⟳ refreshing…", Style::default().fg(p.info)));
        } else {
            spans.push(Span::styled(
                format!("synced {}", self.sync_label),
                styles::text_muted(p),
            ));
        }

        let role = if self.is_admin { "admin" } else { "read-only" };
        let name = self.user.map(|u| u.name.as_str()).unwrap_or("signed in");
        spans.push(Span::styled("  │  ", styles::text_muted(p)));
        spans.push(Span::styled(name.to_string(), styles::text(p)));
        spans.push(Span::styled(
            format!(" [{}] ", role),
            if self.is_admin {
                styles::accent_bold(p)
            } else {
                styles::text_muted(p)
            },
        ));
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(" appdesk", styles::accent_bold(self.palette)),
            Span::styled("  │  ", styles::text_muted(self.palette)),
            Span::styled(
                self.page_title.to_string(),
                styles::text(self.palette).add_modifier(Modifier::BOLD),
            ),
        ]);
        let status = Line::from(self.status_spans());
        let status_width = (status.width() as u16).min(inner.width);
        let [title_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(inner);

        Paragraph::new(title).render(title_area, buf);
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .render(status_area, buf);
    }
}
