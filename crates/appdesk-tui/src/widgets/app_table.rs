//! Applications table

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use appdesk_core::Application;

use crate::theme::{styles, Palette};

const HEADERS: [&str; 6] = ["Name", "Theme", "Department", "Performance", "Status", "Created"];

pub struct ApplicationTable<'a> {
    rows: &'a [&'a Application],
    selected: usize,
    title: String,
    palette: &'a Palette,
}

impl<'a> ApplicationTable<'a> {
    pub fn new(rows: &'a [&'a Application], palette: &'a Palette) -> Self {
        Self {
            rows,
            selected: 0,
            title: String::new(),
            palette,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn row(&self, app: &'a Application) -> Row<'a> {
        let p = self.palette;
        let created = app
            .created_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        Row::new(vec![
            Cell::from(app.name.as_str()),
            Cell::from(app.theme.as_str()),
            Cell::from(app.department.as_str()),
            Cell::from(Span::styled(
                app.performance.as_str(),
                styles::performance(p, app.performance_level()),
            )),
            Cell::from(Span::styled(
                app.status.as_str(),
                styles::status(p, app.status),
            )),
            Cell::from(Span::styled(created, styles::text_muted(p))),
        ])
        .style(styles::text(p))
    }
}

impl Widget for ApplicationTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let title = format!(" {} ({}) ", self.title, self.rows.len());
        let block = styles::glass_block(p, true).title(title);

        if self.rows.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No applications")
                .alignment(Alignment::Center)
                .style(styles::text_muted(p))
                .render(inner, buf);
            return;
        }

        let header = Row::new(HEADERS.map(Cell::from)).style(styles::accent_bold(p));
        let rows: Vec<Row> = self.rows.iter().map(|app| self.row(*app)).collect();
        let widths = [
            Constraint::Percentage(22),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(styles::selected_row(p))
            .highlight_symbol("▸ ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_application, TestTerminal};
    use crate::theme::palette::MIDNIGHT;
    use appdesk_core::Status;

    #[test]
    fn test_table_renders_rows_and_header() {
        let a = test_application(1, "Fleet", "Transport", Status::Active);
        let b = test_application(2, "Stock", "Logistique", Status::Inactive);
        let rows = [&a, &b];
        let mut term = TestTerminal::new();

        term.render_widget(
            ApplicationTable::new(&rows, &MIDNIGHT)
                .title("Dashboard")
                .selected(1),
            Rect::new(0, 0, 100, 8),
        );

        assert!(term.buffer_contains("Dashboard (2)"));
        assert!(term.buffer_contains("Performance"));
        assert!(term.buffer_contains("Fleet"));
        assert!(term.buffer_contains("▸ Stock"));
        assert!(term.buffer_contains("inactive"));
        assert!(term.buffer_contains("2025-01-15"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let rows: [&Application; 0] = [];
        let mut term = TestTerminal::new();
        term.render_widget(
            ApplicationTable::new(&rows, &MIDNIGHT).title("Global"),
            Rect::new(0, 0, 60, 6),
        );
        assert!(term.buffer_contains("No applications"));
        assert!(term.buffer_contains("Global (0)"));
    }
}
