//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{applications, keys::handle_key, refresh, session, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // The sync label is derived from the clock at render time
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(section) => {
            state.dashboard.set_section(section);
            UpdateResult::none()
        }
        Message::NextSection => {
            let next = state.dashboard.section.next();
            state.dashboard.set_section(next);
            UpdateResult::none()
        }
        Message::PreviousSection => {
            let previous = state.dashboard.section.previous();
            state.dashboard.set_section(previous);
            UpdateResult::none()
        }
        Message::SelectNext => {
            state.dashboard.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.dashboard.select_previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search & Filters
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }
        Message::SearchInput { text } => {
            state.dashboard.filter.search = text;
            state.dashboard.clamp_selection();
            UpdateResult::none()
        }
        Message::ExitSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        Message::CycleDepartmentFilter => {
            let filter = &mut state.dashboard.filter;
            filter.department = filter.department.cycle();
            state.dashboard.clamp_selection();
            UpdateResult::none()
        }
        Message::CycleStatusFilter => {
            let filter = &mut state.dashboard.filter;
            filter.status = filter.status.cycle();
            state.dashboard.clamp_selection();
            UpdateResult::none()
        }
        Message::ClearFilters => {
            state.dashboard.filter = Default::default();
            state.dashboard.clamp_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::SetTheme(theme) => session::handle_set_theme(state, theme),
        Message::ToggleTheme => UpdateResult::message(Message::SetTheme(state.theme.toggled())),

        // ─────────────────────────────────────────────────────────
        // Loading
        // ─────────────────────────────────────────────────────────
        Message::LoadApplications => UpdateResult::action(UpdateAction::LoadApplications),
        Message::ApplicationsLoaded { applications } => {
            applications::handle_loaded(state, applications)
        }
        Message::ApplicationsLoadFailed { error } => applications::handle_load_failed(&error),

        // ─────────────────────────────────────────────────────────
        // Create / Edit Form
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateForm => applications::handle_open_create_form(state),
        Message::EditSelected => applications::handle_edit_selected(state),
        Message::FormInput(c) => {
            state.form.input_char(c);
            UpdateResult::none()
        }
        Message::FormBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }
        Message::FormNextField => {
            state.form.focus_next();
            UpdateResult::none()
        }
        Message::FormPreviousField => {
            state.form.focus_previous();
            UpdateResult::none()
        }
        Message::FormCycle { forward } => {
            state.form.cycle(forward);
            UpdateResult::none()
        }
        Message::SubmitForm => applications::handle_submit_form(state),
        Message::ResetForm => applications::handle_reset_form(state),
        Message::ApplicationCreated { name } => applications::handle_created(state, name),
        Message::ApplicationUpdated { name } => applications::handle_updated(state, name),

        // ─────────────────────────────────────────────────────────
        // Status / Delete
        // ─────────────────────────────────────────────────────────
        Message::ToggleSelectedStatus => applications::handle_toggle_selected_status(state),
        Message::StatusToggled { id, status } => {
            applications::handle_status_toggled(state, id, status)
        }
        Message::RequestDeleteSelected => applications::handle_request_delete(state),
        Message::ConfirmDelete { id } => applications::handle_confirm_delete(state, id),
        Message::ApplicationDeleted { id } => applications::handle_deleted(state, id),
        Message::CancelDialog => {
            state.close_confirm_dialog();
            UpdateResult::none()
        }
        Message::MutationFailed { error } => applications::handle_mutation_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Refresh & Export
        // ─────────────────────────────────────────────────────────
        Message::Refresh { export } => refresh::handle_refresh(state, export),
        Message::RelanceFinished { notified, export } => {
            refresh::handle_relance_finished(state, notified, export)
        }
        Message::ExportReport => refresh::handle_export(state),
        Message::ReportExported { path } => refresh::handle_exported(state, &path),
        Message::ExportFailed { error } => refresh::handle_export_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Notices
        // ─────────────────────────────────────────────────────────
        Message::ShowNotice { text } => {
            state.show_notice(text);
            UpdateResult::none()
        }
        Message::DismissNotice => {
            state.dismiss_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Authentication
        // ─────────────────────────────────────────────────────────
        Message::LoginInput(c) => {
            state.login.input_char(c);
            UpdateResult::none()
        }
        Message::LoginBackspace => {
            state.login.backspace();
            UpdateResult::none()
        }
        Message::LoginToggleField => {
            state.login.toggle_focus();
            UpdateResult::none()
        }
        Message::SubmitLogin => session::handle_submit_login(state),
        Message::LoginSucceeded { user, token } => {
            session::handle_login_succeeded(state, user, &token)
        }
        Message::LoginFailed { message } => session::handle_login_failed(state, message),
        Message::Logout => session::handle_logout(state),
    }
}
