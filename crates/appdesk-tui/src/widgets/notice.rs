//! Modal notice that must be dismissed

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, clear_area};
use crate::theme::{styles, Palette};

const MODAL_WIDTH: u16 = 52;

pub struct NoticeDialog<'a> {
    text: &'a str,
    palette: &'a Palette,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(text: &'a str, palette: &'a Palette) -> Self {
        Self { text, palette }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        // Rough wrap estimate: borders take 2 columns, padding 2 more
        let text_width = (MODAL_WIDTH - 4) as usize;
        let text_lines = self.text.chars().count().div_ceil(text_width).max(1) as u16;
        let modal = centered_rect(MODAL_WIDTH, text_lines + 5, area);
        clear_area(modal, buf);

        let block = styles::modal_block(p, " Notice ").title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, text_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text(p))
            .render(text_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[", styles::text_muted(p)),
            Span::styled("Enter", styles::keybinding(p)),
            Span::styled("] OK", styles::text_muted(p)),
        ]))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::MIDNIGHT;

    #[test]
    fn test_notice_renders_text_and_hint() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(
            NoticeDialog::new("Action reserved for administrators", &MIDNIGHT),
            area,
        );

        assert!(term.buffer_contains("Notice"));
        assert!(term.buffer_contains("Action reserved for administrators"));
        assert!(term.buffer_contains("[Enter] OK"));
    }
}
