//! Counters and average performance

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct StatsBar<'a> {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub departments: usize,
    /// Bucketed label or the empty placeholder
    pub average: String,
    pub palette: &'a Palette,
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let sep = || Span::styled("  │  ", styles::text_muted(p));
        let line = Line::from(vec![
            Span::styled(" Total ", styles::text_muted(p)),
            Span::styled(self.total.to_string(), styles::accent_bold(p)),
            sep(),
            Span::styled("Active ", styles::text_muted(p)),
            Span::styled(self.active.to_string(), Style::default().fg(p.success)),
            sep(),
            Span::styled("Inactive ", styles::text_muted(p)),
            Span::styled(self.inactive.to_string(), Style::default().fg(p.danger)),
            sep(),
            Span::styled("Departments ", styles::text_muted(p)),
            Span::styled(self.departments.to_string(), styles::text(p)),
            sep(),
            Span::styled("Avg performance ", styles::text_muted(p)),
            Span::styled(self.average, styles::accent_bold(p)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_stats_render_counts() {
        let mut term = TestTerminal::new();
        let stats = StatsBar {
            total: 3,
            active: 2,
            inactive: 1,
            departments: 3,
            average: "---".into(),
            palette: &LIGHT,
        };

        term.render_widget(stats, Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains("Total 3"));
        assert!(term.buffer_contains("Inactive 1"));
        assert!(term.buffer_contains("Avg performance ---"));
    }
}
