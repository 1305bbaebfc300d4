//! Sign-in, logout and theme handlers

use appdesk_core::prelude::*;
use appdesk_core::{role_from_token, User};

use crate::config::Theme;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    if !state.login.can_submit() {
        return UpdateResult::none();
    }
    state.login.submitting = true;
    state.login.error = None;
    UpdateResult::action(UpdateAction::SignIn {
        email: state.login.email.trim().to_string(),
        password: state.login.password.clone(),
    })
}

/// Session is already persisted by the authenticator; open the dashboard
/// and load.
pub fn handle_login_succeeded(state: &mut AppState, user: User, token: &str) -> UpdateResult {
    let is_admin = role_from_token(token).as_deref() == Some("admin") || user.is_admin();
    info!("Signed in as {} (admin: {})", user.email, is_admin);
    state.enter_dashboard(is_admin, Some(user));
    UpdateResult::action(UpdateAction::LoadApplications)
}

pub fn handle_login_failed(state: &mut AppState, message: Option<String>) -> UpdateResult {
    state.login.fail(message);
    if let Some(error) = &state.login.error {
        warn!("Sign-in failed: {}", error);
    }
    UpdateResult::none()
}

pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::Login {
        return UpdateResult::none();
    }
    state.leave_dashboard();
    UpdateResult::action(UpdateAction::Logout)
}

pub fn handle_set_theme(state: &mut AppState, theme: Theme) -> UpdateResult {
    state.theme = theme;
    UpdateResult::action(UpdateAction::PersistTheme { theme })
}
