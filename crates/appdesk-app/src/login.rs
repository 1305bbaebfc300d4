//! Login screen state

/// Fallback shown when a failed sign-in carries no server message
pub const LOGIN_FAILED_FALLBACK: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// A sign-in request is in flight
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::Email => self.email.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    /// Both fields filled and nothing in flight
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }

    /// Record a failure and re-enable submission
    pub fn fail(&mut self, message: Option<String>) {
        self.submitting = false;
        self.error = Some(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| LOGIN_FAILED_FALLBACK.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit_requires_both_fields() {
        let mut login = LoginState::default();
        assert!(!login.can_submit());

        "a@b.c".chars().for_each(|c| login.input_char(c));
        assert!(!login.can_submit());

        login.toggle_focus();
        "pw".chars().for_each(|c| login.input_char(c));
        assert!(login.can_submit());
        assert_eq!(login.masked_password(), "••");

        login.submitting = true;
        assert!(!login.can_submit());
    }

    #[test]
    fn test_fail_uses_fallback_for_empty_message() {
        let mut login = LoginState {
            submitting: true,
            ..LoginState::default()
        };
        login.fail(None);
        assert_eq!(login.error.as_deref(), Some("Login failed"));
        assert!(!login.submitting);

        login.fail(Some("Invalid credentials".into()));
        assert_eq!(login.error.as_deref(), Some("Invalid credentials"));
    }
}
