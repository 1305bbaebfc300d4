//! Application state (Model in TEA pattern)

use appdesk_core::{role_from_token, User};

use crate::config::{Settings, Theme};
use crate::confirm_dialog::ConfirmDialogState;
use crate::dashboard::DashboardState;
use crate::form::FormState;
use crate::login::LoginState;

/// Role value granting mutation rights
const ADMIN_ROLE: &str = "admin";

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Credentials form (no stored session)
    #[default]
    Login,

    /// Dashboard with sidebar, stats, table and history
    Normal,

    /// Search input mode - capturing text for the search term
    SearchInput,

    /// Create/edit form overlay
    Form,

    /// Confirmation dialog (delete)
    ConfirmDialog,

    /// Modal notice that must be dismissed
    Notice,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Persisted values read once at startup
#[derive(Debug, Clone, Default)]
pub struct StoredSession {
    pub token: Option<String>,
    pub role: Option<String>,
    pub theme: Option<String>,
    pub user: Option<User>,
}

impl StoredSession {
    /// Token role or stored role is `admin`
    pub fn is_admin(&self) -> bool {
        let token_role = self.token.as_deref().and_then(role_from_token);
        token_role.as_deref() == Some(ADMIN_ROLE) || self.role.as_deref() == Some(ADMIN_ROLE)
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    /// Mode to return to when a modal closes
    pub previous_mode: UiMode,
    pub settings: Settings,
    pub theme: Theme,
    pub user: Option<User>,
    pub dashboard: DashboardState,
    pub login: LoginState,
    pub form: FormState,
    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let theme = settings.ui.default_theme;
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Login,
            previous_mode: UiMode::Login,
            settings,
            theme,
            user: None,
            dashboard: DashboardState::default(),
            login: LoginState::default(),
            form: FormState::default(),
            confirm_dialog_state: None,
            notice: None,
        }
    }

    /// Initial state from settings and persisted storage.
    ///
    /// A stored token opens the dashboard directly; otherwise the login
    /// screen is shown.
    pub fn restore(settings: Settings, stored: &StoredSession) -> Self {
        let mut state = Self::with_settings(settings);
        if let Some(theme) = stored.theme.as_deref() {
            state.theme = Theme::from_stored(Some(theme));
        }
        if stored.has_token() {
            state.enter_dashboard(stored.is_admin(), stored.user.clone());
        }
        state
    }

    /// Fresh dashboard session
    pub fn enter_dashboard(&mut self, is_admin: bool, user: Option<User>) {
        self.dashboard = DashboardState::new(is_admin);
        self.user = user;
        self.login = LoginState::default();
        self.form.reset();
        self.ui_mode = UiMode::Normal;
    }

    /// Drop session state and return to the login screen
    pub fn leave_dashboard(&mut self) {
        self.dashboard = DashboardState::default();
        self.user = None;
        self.form.reset();
        self.confirm_dialog_state = None;
        self.notice = None;
        self.ui_mode = UiMode::Login;
    }

    pub fn is_dashboard(&self) -> bool {
        !matches!(self.ui_mode, UiMode::Login)
    }

    /// Show a modal notice over the current screen
    pub fn show_notice(&mut self, text: impl Into<String>) {
        if self.ui_mode != UiMode::Notice {
            self.previous_mode = self.ui_mode;
        }
        self.notice = Some(text.into());
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = match self.previous_mode {
            UiMode::Notice => UiMode::Normal,
            // the dialog never resumes behind a notice
            UiMode::ConfirmDialog => {
                self.confirm_dialog_state = None;
                UiMode::Normal
            }
            mode => mode,
        };
    }

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog_state = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn close_confirm_dialog(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
