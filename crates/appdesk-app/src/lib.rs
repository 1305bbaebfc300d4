//! appdesk-app - Dashboard state and orchestration
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`Message`] the events, and [`handler::update`] the pure transition
//! function. Side effects are described as [`UpdateAction`]s and executed by
//! [`actions::handle_action`] against the gateways in `appdesk-api`.

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod dashboard;
pub mod export;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod login;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::Services;
pub use config::{Settings, Theme};
pub use dashboard::DashboardState;
pub use handler::{UpdateAction, UpdateResult, ADMIN_ONLY_NOTICE};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, StoredSession, UiMode};
