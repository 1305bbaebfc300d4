//! appdesk-tui - Terminal UI for appdesk
//!
//! ratatui front end over the `appdesk-app` state machine: terminal event
//! polling, the view function and the dashboard widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
