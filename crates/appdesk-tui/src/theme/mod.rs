//! Theme system: one palette per [`appdesk_app::Theme`] plus style builders
//! that take the active palette.

pub mod palette;
pub mod styles;

pub use palette::{for_theme, Palette};
