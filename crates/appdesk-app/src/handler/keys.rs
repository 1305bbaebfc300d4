//! Key event handlers for different UI modes

use appdesk_core::Section;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Login => handle_key_login(key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Form => handle_key_form(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::Notice => handle_key_notice(key),
    }
}

/// Handle key events on the login screen
fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginToggleField)
        }
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Force quit - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Sections
        // ─────────────────────────────────────────────────────────
        InputKey::Char('1') => Some(Message::SelectSection(Section::Dashboard)),
        InputKey::Char('2') => Some(Message::SelectSection(Section::Transport)),
        InputKey::Char('3') => Some(Message::SelectSection(Section::Logistique)),
        InputKey::Char('4') => Some(Message::SelectSection(Section::Global)),
        InputKey::Tab => Some(Message::NextSection),
        InputKey::BackTab => Some(Message::PreviousSection),

        // ─────────────────────────────────────────────────────────
        // Table Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),

        // ─────────────────────────────────────────────────────────
        // Search & Filters
        // ─────────────────────────────────────────────────────────
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('f') => Some(Message::CycleDepartmentFilter),
        InputKey::Char('a') => Some(Message::CycleStatusFilter),
        InputKey::Char('c') => Some(Message::ClearFilters),

        // ─────────────────────────────────────────────────────────
        // Mutations (admin-gated in the handlers)
        // ─────────────────────────────────────────────────────────
        InputKey::Char('n') => Some(Message::OpenCreateForm),
        InputKey::Char('e') | InputKey::Enter => Some(Message::EditSelected),
        InputKey::Char('s') | InputKey::Char(' ') => Some(Message::ToggleSelectedStatus),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDeleteSelected),

        // ─────────────────────────────────────────────────────────
        // Refresh, Export, Theme, Session
        // ─────────────────────────────────────────────────────────
        InputKey::Char('r') | InputKey::F(5) => Some(Message::Refresh {
            export: state.settings.behavior.export_on_refresh,
        }),
        InputKey::Char('x') => Some(Message::ExportReport),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('L') => Some(Message::Logout),

        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    let query = &state.dashboard.filter.search;
    match key {
        // Keep the term and return to the table
        InputKey::Esc | InputKey::Enter => Some(Message::ExitSearch),

        InputKey::Backspace => {
            let mut text = query.clone();
            text.pop();
            Some(Message::SearchInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = query.clone();
            text.push(c);
            Some(Message::SearchInput { text })
        }

        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in the create/edit form
fn handle_key_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ResetForm),
        InputKey::Enter => Some(Message::SubmitForm),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPreviousField),
        InputKey::Left => Some(Message::FormCycle { forward: false }),
        InputKey::Right => Some(Message::FormCycle { forward: true }),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

/// Handle key events in the confirmation dialog
fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => state
            .confirm_dialog_state
            .as_ref()
            .and_then(|dialog| dialog.confirm_message()),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDialog),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_notice(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissNotice),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
