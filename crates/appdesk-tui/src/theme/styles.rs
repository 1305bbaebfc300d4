//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use appdesk_core::{Performance, Status};

use super::Palette;

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.warning).add_modifier(Modifier::BOLD)
}

pub fn selected_row(p: &Palette) -> Style {
    Style::default()
        .fg(p.selection_fg)
        .bg(p.selection_bg)
        .add_modifier(Modifier::BOLD)
}

// --- Domain styles ---
pub fn status(p: &Palette, status: Status) -> Style {
    match status {
        Status::Active => Style::default().fg(p.success),
        Status::Inactive => Style::default().fg(p.danger),
    }
}

/// Colour by level; unknown labels stay muted
pub fn performance(p: &Palette, level: Option<Performance>) -> Style {
    match level {
        Some(Performance::Excellent) => Style::default().fg(p.success),
        Some(Performance::Bon) => Style::default().fg(p.info),
        Some(Performance::Moyen) => Style::default().fg(p.warning),
        Some(Performance::Faible) => Style::default().fg(p.danger),
        None => text_muted(p),
    }
}

// --- Containers ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { p.border_active } else { p.border }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg).fg(p.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::MIDNIGHT;

    #[test]
    fn test_status_colours_differ() {
        assert_ne!(
            status(&MIDNIGHT, Status::Active),
            status(&MIDNIGHT, Status::Inactive)
        );
    }

    #[test]
    fn test_unknown_performance_is_muted() {
        assert_eq!(performance(&MIDNIGHT, None), text_muted(&MIDNIGHT));
    }
}
