//! Colour palettes for the two themes

use ratatui::style::Color;

use appdesk_app::Theme;

/// Colour roles used by the widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Text ---
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,

    // --- Status ---
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub info: Color,

    // --- Selection ---
    pub selection_fg: Color,
    pub selection_bg: Color,
}

pub const MIDNIGHT: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    text: Color::Rgb(201, 209, 217),
    text_muted: Color::Rgb(125, 133, 144),
    accent: Color::Rgb(88, 166, 255),
    success: Color::Rgb(16, 185, 129),
    danger: Color::Rgb(244, 63, 94),
    warning: Color::Rgb(234, 179, 8),
    info: Color::Rgb(56, 189, 248),
    selection_fg: Color::Rgb(240, 246, 252),
    selection_bg: Color::Rgb(37, 99, 235),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(234, 238, 242),
    border: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),
    text: Color::Rgb(31, 35, 40),
    text_muted: Color::Rgb(101, 109, 118),
    accent: Color::Rgb(9, 105, 218),
    success: Color::Rgb(26, 127, 55),
    danger: Color::Rgb(207, 34, 46),
    warning: Color::Rgb(154, 103, 0),
    info: Color::Rgb(5, 80, 174),
    selection_fg: Color::Rgb(255, 255, 255),
    selection_bg: Color::Rgb(9, 105, 218),
};

pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Midnight => &MIDNIGHT,
        Theme::Light => &LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_have_distinct_backgrounds() {
        assert_ne!(
            for_theme(Theme::Midnight).background,
            for_theme(Theme::Light).background
        );
    }
}
