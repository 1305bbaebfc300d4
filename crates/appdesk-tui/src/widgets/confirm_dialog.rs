//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use appdesk_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay::{centered_rect, clear_area};
use crate::theme::{styles, Palette};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    palette: &'a Palette,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = centered_rect(56, 8, area);
        clear_area(modal, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(p, &title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message_area, buttons_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(p.warning))
            .render(message_area, buf);

        // First option confirms (y), the rest cancel (n)
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            let (key, key_style) = if i == 0 {
                ("y", Style::default().fg(p.danger))
            } else {
                ("n", Style::default().fg(p.text))
            };
            spans.push(Span::styled("[", styles::text_muted(p)));
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted(p)));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}
