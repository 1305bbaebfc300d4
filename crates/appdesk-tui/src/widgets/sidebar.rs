//! Section navigation

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use appdesk_core::Section;

use crate::theme::{styles, Palette};

pub struct Sidebar<'a> {
    current: Section,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(current: Section, palette: &'a Palette) -> Self {
        Self { current, palette }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false).title(" Sections ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let selected = *section == self.current;
                let marker = if selected { "▸" } else { " " };
                let label_style = if selected {
                    styles::selected_row(p)
                } else {
                    styles::text(p)
                };
                Line::from(vec![
                    Span::styled(format!("{} ", marker), styles::accent_bold(p)),
                    Span::styled(format!("{} ", i + 1), styles::keybinding(p)),
                    Span::styled(format!(" {} ", section.title()), label_style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::MIDNIGHT;

    #[test]
    fn test_sidebar_lists_sections_with_marker() {
        let mut term = TestTerminal::new();
        term.render_widget(
            Sidebar::new(Section::Logistique, &MIDNIGHT),
            Rect::new(0, 0, 22, 8),
        );

        assert!(term.buffer_contains("Dashboard"));
        assert!(term.buffer_contains("Global"));
        assert!(term.buffer_contains("▸ 3  Logistique"));
    }
}
