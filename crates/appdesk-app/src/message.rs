//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use appdesk_core::{Application, Section, Status, User};

use crate::config::Theme;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectSection(Section),
    NextSection,
    PreviousSection,
    SelectNext,
    SelectPrevious,

    // ─────────────────────────────────────────────────────────
    // Search & Filters
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearch,
    /// Replace the search term
    SearchInput { text: String },
    /// Leave search input mode, keeping the term
    ExitSearch,
    CycleDepartmentFilter,
    CycleStatusFilter,
    /// Reset search and both dropdown filters
    ClearFilters,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    SetTheme(Theme),
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────
    LoadApplications,
    ApplicationsLoaded { applications: Vec<Application> },
    ApplicationsLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Create / Edit Form
    // ─────────────────────────────────────────────────────────
    OpenCreateForm,
    /// Copy the selected record into the form
    EditSelected,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,
    /// Step the focused choice field
    FormCycle { forward: bool },
    SubmitForm,
    /// Clear the draft and close the form
    ResetForm,
    ApplicationCreated { name: String },
    ApplicationUpdated { name: String },

    // ─────────────────────────────────────────────────────────
    // Status / Delete
    // ─────────────────────────────────────────────────────────
    ToggleSelectedStatus,
    StatusToggled { id: i64, status: Status },
    /// Ask for confirmation before deleting the selected record
    RequestDeleteSelected,
    ConfirmDelete { id: i64 },
    ApplicationDeleted { id: i64 },
    CancelDialog,

    /// A mutating request failed; shows a notice
    MutationFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Refresh & Export
    // ─────────────────────────────────────────────────────────
    /// Notify the backend, reload, and optionally export
    Refresh { export: bool },
    /// Relance call finished (`notified` is false when the API was unreachable)
    RelanceFinished { notified: bool, export: bool },
    ExportReport,
    ReportExported { path: PathBuf },
    ExportFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────
    ShowNotice { text: String },
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Authentication
    // ─────────────────────────────────────────────────────────
    LoginInput(char),
    LoginBackspace,
    LoginToggleField,
    SubmitLogin,
    LoginSucceeded { user: User, token: String },
    LoginFailed { message: Option<String> },
    Logout,
}
