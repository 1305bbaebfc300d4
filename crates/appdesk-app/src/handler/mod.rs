//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `applications`: Loading, form and mutation handlers
//! - `refresh`: Refresh cycle and report export
//! - `session`: Sign-in, logout and theme handlers

pub(crate) mod applications;
pub(crate) mod keys;
pub(crate) mod refresh;
pub(crate) mod session;
pub(crate) mod update;


use std::path::PathBuf;

use appdesk_api::RelanceRequest;
use appdesk_core::ApplicationDraft;

use crate::config::Theme;
use crate::message::Message;
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Notice shown when a non-admin triggers a mutating action
pub const ADMIN_ONLY_NOTICE: &str = "Action reserved for administrators";

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the full collection
    LoadApplications,

    /// POST a new record
    CreateApplication { draft: ApplicationDraft },

    /// PUT the full draft over an existing record
    UpdateApplication { id: i64, draft: ApplicationDraft },

    /// PUT the record with its status flipped.
    ///
    /// `draft` already carries the new status.
    SetStatus { id: i64, draft: ApplicationDraft },

    DeleteApplication { id: i64 },

    /// POST the relance notification; always answered with `RelanceFinished`
    NotifyRefresh { request: RelanceRequest, export: bool },

    /// Write a rendered report to disk
    ExportReport { path: PathBuf, html: String },

    SignIn { email: String, password: String },

    /// Store the theme preference
    PersistTheme { theme: Theme },

    /// Clear the persisted session
    Logout,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}

/// Run `f` only for administrators; everyone else gets a notice and no
/// request is issued.
pub(crate) fn require_admin<F>(state: &mut AppState, f: F) -> UpdateResult
where
    F: FnOnce(&mut AppState) -> UpdateResult,
{
    if state.dashboard.is_admin {
        f(state)
    } else {
        tracing::debug!("Blocked admin-only action for non-admin user");
        state.show_notice(ADMIN_ONLY_NOTICE);
        UpdateResult::none()
    }
}
