//! Loading, create/edit form and mutation handlers

use appdesk_core::prelude::*;
use appdesk_core::{Application, Status};

use crate::confirm_dialog::ConfirmDialogState;
use crate::form::FormState;
use crate::state::{AppState, UiMode};

use super::{require_admin, UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────

pub fn handle_loaded(state: &mut AppState, applications: Vec<Application>) -> UpdateResult {
    debug!("Loaded {} applications", applications.len());
    state.dashboard.set_applications(applications);
    UpdateResult::none()
}

/// Keep the current collection; failures to load are only logged
pub fn handle_load_failed(error: &str) -> UpdateResult {
    error!("Failed to load applications: {}", error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────

pub fn handle_open_create_form(state: &mut AppState) -> UpdateResult {
    require_admin(state, |state| {
        state.form.reset();
        state.ui_mode = UiMode::Form;
        UpdateResult::none()
    })
}

pub fn handle_edit_selected(state: &mut AppState) -> UpdateResult {
    require_admin(state, |state| {
        let Some(app) = state.dashboard.selected_application() else {
            return UpdateResult::none();
        };
        state.form = FormState::edit(app);
        state.ui_mode = UiMode::Form;
        UpdateResult::none()
    })
}

pub fn handle_reset_form(state: &mut AppState) -> UpdateResult {
    state.form.reset();
    if state.ui_mode == UiMode::Form {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

/// Create or update depending on whether the form holds a record id.
///
/// A draft without name or department is ignored and the form stays open.
pub fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    require_admin(state, |state| {
        if !state.form.draft.is_submittable() {
            return UpdateResult::none();
        }
        let draft = state.form.draft.clone();
        match state.form.editing_id {
            Some(id) => UpdateResult::action(UpdateAction::UpdateApplication { id, draft }),
            None => UpdateResult::action(UpdateAction::CreateApplication { draft }),
        }
    })
}

pub fn handle_created(state: &mut AppState, name: String) -> UpdateResult {
    after_form_mutation(state, "Created", name)
}

pub fn handle_updated(state: &mut AppState, name: String) -> UpdateResult {
    after_form_mutation(state, "Updated", name)
}

fn after_form_mutation(state: &mut AppState, action: &str, name: String) -> UpdateResult {
    handle_reset_form(state);
    state.dashboard.pending_changes = true;
    state.dashboard.record(action, name);
    UpdateResult::action(UpdateAction::LoadApplications)
}

// ─────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────

pub fn handle_toggle_selected_status(state: &mut AppState) -> UpdateResult {
    require_admin(state, |state| {
        let Some((id, draft)) = state.dashboard.selected_application().and_then(|app| {
            app.id
                .map(|id| (id, app.to_draft().with_status(app.status.toggled())))
        }) else {
            return UpdateResult::none();
        };
        UpdateResult::action(UpdateAction::SetStatus { id, draft })
    })
}

/// Patch the local record in place; no reload
pub fn handle_status_toggled(state: &mut AppState, id: i64, status: Status) -> UpdateResult {
    let Some(app) = state
        .dashboard
        .applications
        .iter_mut()
        .find(|a| a.id == Some(id))
    else {
        warn!("Status changed for unknown application {}", id);
        return UpdateResult::none();
    };
    app.status = status;
    let detail = format!("{} → {}", app.name, status.as_str());

    state.dashboard.pending_changes = true;
    state.dashboard.record("Status changed", detail);
    state.dashboard.clamp_selection();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────

pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    require_admin(state, |state| {
        let Some((id, name)) = state
            .dashboard
            .selected_application()
            .and_then(|app| app.id.map(|id| (id, app.name.clone())))
        else {
            return UpdateResult::none();
        };

        if state.settings.behavior.confirm_delete {
            state.show_confirm_dialog(ConfirmDialogState::delete_application(id, &name));
            UpdateResult::none()
        } else {
            UpdateResult::action(UpdateAction::DeleteApplication { id })
        }
    })
}

pub fn handle_confirm_delete(state: &mut AppState, id: i64) -> UpdateResult {
    state.close_confirm_dialog();
    UpdateResult::action(UpdateAction::DeleteApplication { id })
}

pub fn handle_deleted(state: &mut AppState, id: i64) -> UpdateResult {
    state.dashboard.pending_changes = true;
    state.dashboard.record("Deleted", id.to_string());
    UpdateResult::action(UpdateAction::LoadApplications)
}

pub fn handle_mutation_failed(state: &mut AppState, error: String) -> UpdateResult {
    error!("{}", error);
    if state.is_dashboard() {
        state.show_notice(error);
    }
    UpdateResult::none()
}
