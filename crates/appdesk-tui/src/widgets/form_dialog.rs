//! Create/edit form modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use appdesk_app::form::{FormField, FormState};

use super::modal_overlay::{centered_rect, clear_area};
use crate::theme::{styles, Palette};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 11;
const LABEL_WIDTH: usize = 12;

pub struct FormDialog<'a> {
    form: &'a FormState,
    palette: &'a Palette,
}

impl<'a> FormDialog<'a> {
    pub fn new(form: &'a FormState, palette: &'a Palette) -> Self {
        Self { form, palette }
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let p = self.palette;
        let focused = self.form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH);
        let value = self.form.value(field).to_string();

        let mut spans = vec![
            Span::styled(marker, styles::accent_bold(p)),
            Span::styled(label, styles::text_muted(p)),
        ];
        if field.is_choice() {
            spans.push(Span::styled("◂ ", styles::text_muted(p)));
            spans.push(Span::styled(value, styles::text(p)));
            spans.push(Span::styled(" ▸", styles::text_muted(p)));
        } else {
            spans.push(Span::styled(value, styles::text(p)));
            if focused {
                spans.push(Span::styled("▌", Style::default().fg(p.accent)));
            }
        }
        Line::from(spans)
    }
}

impl Widget for FormDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        clear_area(modal, buf);

        let title = format!(" {} ", self.form.title());
        let block = styles::modal_block(p, &title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [fields_area, _, hints_area] = Layout::vertical([
            Constraint::Length(FormField::ALL.len() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let mut lines = vec![Line::default()];
        lines.extend(FormField::ALL.iter().map(|f| self.field_line(*f)));
        Paragraph::new(lines).render(fields_area, buf);

        let hints = Line::from(vec![
            Span::styled(" Enter", styles::keybinding(p)),
            Span::styled(" save  ", styles::text_muted(p)),
            Span::styled("Tab", styles::keybinding(p)),
            Span::styled(" next  ", styles::text_muted(p)),
            Span::styled("←/→", styles::keybinding(p)),
            Span::styled(" change  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" cancel", styles::text_muted(p)),
        ]);
        Paragraph::new(hints).render(hints_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_application, TestTerminal};
    use crate::theme::palette::MIDNIGHT;
    use appdesk_core::Status;

    #[test]
    fn test_new_form_shows_defaults() {
        let form = FormState::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(FormDialog::new(&form, &MIDNIGHT), area);

        assert!(term.buffer_contains("New application"));
        assert!(term.buffer_contains("▸ Name"));
        assert!(term.buffer_contains("◂ Bon ▸"));
        assert!(term.buffer_contains("◂ active ▸"));
    }

    #[test]
    fn test_edit_form_shows_record() {
        let app = test_application(2, "Stock", "Logistique", Status::Inactive);
        let form = FormState::edit(&app);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(FormDialog::new(&form, &MIDNIGHT), area);

        assert!(term.buffer_contains("Edit application"));
        assert!(term.buffer_contains("Stock▌"));
        assert!(term.buffer_contains("Logistique"));
        assert!(term.buffer_contains("◂ inactive ▸"));
    }
}
