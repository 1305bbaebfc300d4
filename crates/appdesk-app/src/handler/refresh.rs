//! Refresh cycle and report export

use std::path::Path;

use chrono::Local;

use appdesk_api::RelanceRequest;
use appdesk_core::prelude::*;

use crate::export::render_report;
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Start a refresh: mark busy and notify the backend.
///
/// Ignored while a cycle is already running.
pub fn handle_refresh(state: &mut AppState, export: bool) -> UpdateResult {
    if state.dashboard.refreshing {
        debug!("Refresh already in progress");
        return UpdateResult::none();
    }
    state.dashboard.refreshing = true;
    let request = RelanceRequest::new(state.dashboard.pending_changes, Local::now());
    UpdateResult::action(UpdateAction::NotifyRefresh { request, export })
}

/// Finish the cycle whatever the relance outcome was
pub fn handle_relance_finished(state: &mut AppState, notified: bool, export: bool) -> UpdateResult {
    let dashboard = &mut state.dashboard;
    if notified {
        dashboard.record("Relance API", "Backend notified");
    } else {
        dashboard.record("Local sync", "API unavailable");
    }

    dashboard.pending_changes = false;
    dashboard.last_sync = Local::now();
    dashboard.refreshing = false;

    if notified {
        dashboard.record("Sync complete", "Data refreshed");
    }

    let result = UpdateResult::action(UpdateAction::LoadApplications);
    if export {
        result.with_message(Message::ExportReport)
    } else {
        result
    }
}

/// Render the active section and hand it to the writer
pub fn handle_export(state: &mut AppState) -> UpdateResult {
    let dashboard = &state.dashboard;
    let rows = dashboard.section_applications();
    let html = render_report(dashboard.page_title(), &rows);
    let path = state.settings.export.resolve_path();
    UpdateResult::action(UpdateAction::ExportReport { path, html })
}

pub fn handle_exported(state: &mut AppState, path: &Path) -> UpdateResult {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    state.dashboard.record("Export DOC", format!("{} created", file));
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Export failed: {}", error);
    state.show_notice(error);
    UpdateResult::none()
}
