//! Recent actions, newest first

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use appdesk_core::HistoryLog;

use crate::theme::{styles, Palette};

pub struct HistoryPanel<'a> {
    history: &'a HistoryLog,
    palette: &'a Palette,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(history: &'a HistoryLog, palette: &'a Palette) -> Self {
        Self { history, palette }
    }
}

/// Cut `text` to at most `width` display columns
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

impl Widget for HistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let p = self.palette;
        let block = styles::glass_block(p, false).title(" History ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.history.is_empty() {
            Paragraph::new(Span::styled(" No activity yet", styles::text_muted(p)))
                .render(inner, buf);
            return;
        }

        let detail_width = (inner.width as usize).saturating_sub(11);
        let lines: Vec<Line> = self
            .history
            .iter()
            .take(inner.height as usize)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.time.format("%H:%M:%S")),
                        styles::text_muted(p),
                    ),
                    Span::styled(truncate(&entry.summary(), detail_width), styles::text(p)),
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
    fn test_newest_entry_first() {
        let mut log = HistoryLog::default();
        log.record("Created", Some("Fleet".into()));
        log.record("Deleted", Some("4".into()));

        let mut term = TestTerminal::new();
        term.render_widget(HistoryPanel::new(&log, &MIDNIGHT), Rect::new(0, 0, 60, 5));

        let content = term.content();
        let deleted = content.find("Deleted: 4").unwrap();
        let created = content.find("Created: Fleet").unwrap();
        assert!(deleted < created);
    }

    #[test]
    fn test_truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
