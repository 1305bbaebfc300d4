//! Search term and dropdown filters

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use appdesk_core::ListFilter;

use crate::theme::{styles, Palette};

pub struct SearchBar<'a> {
    filter: &'a ListFilter,
    /// Search input mode is active
    editing: bool,
    /// Dropdowns only apply on the overview
    dropdowns_active: bool,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    pub fn new(filter: &'a ListFilter, palette: &'a Palette) -> Self {
        Self {
            filter,
            editing: false,
            dropdowns_active: true,
            palette,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn dropdowns_active(mut self, active: bool) -> Self {
        self.dropdowns_active = active;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.editing);
        let inner = block.inner(area);
        block.render(area, buf);

        let search = if self.filter.search.is_empty() && !self.editing {
            Span::styled("type / to search", styles::text_muted(p))
        } else {
            Span::styled(self.filter.search.clone(), styles::text(p))
        };
        let mut spans = vec![Span::styled(" Search: ", styles::text_muted(p)), search];
        if self.editing {
            spans.push(Span::styled("▌", Style::default().fg(p.accent)));
        }

        let dropdown_style = if self.dropdowns_active {
            styles::text(p)
        } else {
            styles::text_muted(p)
        };
        spans.extend([
            Span::styled("   Department: ", styles::text_muted(p)),
            Span::styled(self.filter.department.label(), dropdown_style),
            Span::styled("   Status: ", styles::text_muted(p)),
            Span::styled(self.filter.status.label(), dropdown_style),
        ]);
        if !self.filter.is_default() {
            spans.push(Span::styled("   c clear", styles::text_muted(p)));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
