//! Remote auth gateway and current-user holder
//!
//! The authenticated user is published on a `tokio::sync::watch` channel so
//! any number of observers can follow login/logout. The holder is seeded from
//! storage at construction.

use std::sync::Arc;

use appdesk_core::prelude::*;
use appdesk_core::User;
use reqwest::Method;
use tokio::sync::watch;

use crate::client::ApiClient;
use crate::protocol::{SignInRequest, SignInResponse};
use crate::storage::{Storage, ROLE_KEY, TOKEN_KEY, USER_KEY};

const SIGN_IN_PATH: &str = "/api/user/signin";

/// Session operations the login flow depends on
#[trait_variant::make(Authenticator: Send)]
pub trait LocalAuthenticator {
    /// Exchange credentials for a token and user
    async fn sign_in(&self, email: String, password: String) -> Result<SignInResponse>;

    /// Persist token, user and role and publish the user
    fn set_current_user(&self, user: User, token: &str) -> Result<()>;

    /// Clear the persisted session and publish `None`
    fn logout(&self) -> Result<()>;
}

/// [`Authenticator`] over HTTP with a storage-backed session
pub struct AuthGateway {
    client: ApiClient,
    storage: Arc<dyn Storage>,
    current: watch::Sender<Option<User>>,
}

impl AuthGateway {
    pub fn new(client: ApiClient) -> Self {
        let storage = Arc::clone(client.storage());
        let initial = load_user_from_storage(storage.as_ref());
        let (current, _) = watch::channel(initial);

        Self {
            client,
            storage,
            current,
        }
    }

    /// Observe login/logout transitions
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && self.current.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.borrow().as_ref().is_some_and(User::is_admin)
    }

    pub fn is_employee(&self) -> bool {
        self.current.borrow().as_ref().is_some_and(User::is_employee)
    }

    /// Admins and `All` users see everything; nobody logged in sees nothing
    pub fn can_access_department(&self, department: &str) -> bool {
        self.current
            .borrow()
            .as_ref()
            .is_some_and(|u| u.can_access_department(department))
    }

    pub fn user_departments(&self) -> Vec<String> {
        self.current
            .borrow()
            .as_ref()
            .map(User::departments)
            .unwrap_or_default()
    }

    pub async fn sign_in(&self, email: String, password: String) -> Result<SignInResponse> {
        let request = SignInRequest { email, password };
        let response: SignInResponse = self
            .client
            .send(Method::POST, SIGN_IN_PATH, &request)
            .await?;
        info!("Signed in as {}", response.user.email);
        Ok(response)
    }

    pub fn set_current_user(&self, user: User, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &serde_json::to_string(&user)?)?;
        self.storage.set(ROLE_KEY, user.role.as_str())?;
        self.current.send_replace(Some(user));
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        clear_session(self.storage.as_ref())?;
        self.current.send_replace(None);
        info!("Logged out");
        Ok(())
    }
}

impl Authenticator for AuthGateway {
    async fn sign_in(&self, email: String, password: String) -> Result<SignInResponse> {
        AuthGateway::sign_in(self, email, password).await
    }

    fn set_current_user(&self, user: User, token: &str) -> Result<()> {
        AuthGateway::set_current_user(self, user, token)
    }

    fn logout(&self) -> Result<()> {
        AuthGateway::logout(self)
    }
}

/// Cached user when both token and user are stored.
///
/// A stored user that fails to parse forces a logout.
fn load_user_from_storage(storage: &dyn Storage) -> Option<User> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let raw = storage.get(USER_KEY);

    let (Some(_), Some(raw)) = (token, raw) else {
        return None;
    };

    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Stored user is malformed, clearing session: {}", e);
            if let Err(e) = clear_session(storage) {
                error!("Failed to clear session: {}", e);
            }
            None
        }
    }
}

fn clear_session(storage: &dyn Storage) -> Result<()> {
    storage.remove(TOKEN_KEY)?;
    storage.remove(USER_KEY)?;
    storage.remove(ROLE_KEY)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, THEME_KEY};
    use appdesk_core::{Role, UserDepartment};

    const USER_JSON: &str = r#"{"id":1,"email":"e@x.io","name":"E","role":"employee","department":"Logistique"}"#;

    fn gateway(storage: Arc<MemoryStorage>) -> AuthGateway {
        AuthGateway::new(ApiClient::new("http://localhost:1", storage).unwrap())
    }

    fn admin() -> User {
        User {
            id: 9,
            email: "root@x.io".into(),
            name: "Root".into(),
            role: Role::Admin,
            department: UserDepartment::Transport,
        }
    }

    #[test]
    fn test_seeded_from_storage() {
        let storage = Arc::new(MemoryStorage::with_entries([
            (TOKEN_KEY, "tok"),
            (USER_KEY, USER_JSON),
        ]));
        let auth = gateway(storage);

        assert!(auth.is_logged_in());
        assert!(auth.is_employee());
        assert!(auth.can_access_department("Logistique"));
        assert!(!auth.can_access_department("Transport"));
        assert_eq!(auth.user_departments(), vec!["Logistique".to_string()]);
    }

    #[test]
    fn test_user_without_token_is_not_restored() {
        let storage = Arc::new(MemoryStorage::with_entries([(USER_KEY, USER_JSON)]));
        let auth = gateway(storage);
        assert!(auth.current_user().is_none());
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_malformed_user_forces_logout() {
        let storage = Arc::new(MemoryStorage::with_entries([
            (TOKEN_KEY, "tok"),
            (USER_KEY, "{broken"),
            (ROLE_KEY, "admin"),
            (THEME_KEY, "light"),
        ]));
        let auth = gateway(Arc::clone(&storage));

        assert!(auth.current_user().is_none());
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);
        assert_eq!(storage.get(ROLE_KEY), None);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_no_user_has_no_access() {
        let auth = gateway(Arc::new(MemoryStorage::new()));
        assert!(!auth.can_access_department("Global"));
        assert!(auth.user_departments().is_empty());
        assert!(!auth.is_admin());
    }

    #[tokio::test]
    async fn test_set_current_user_notifies_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let auth = gateway(Arc::clone(&storage));
        let mut rx = auth.subscribe();

        auth.set_current_user(admin(), "new-token").unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|u| u.id), Some(9));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("new-token"));
        assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("admin"));
        assert!(auth.is_admin());
        assert_eq!(auth.user_departments().len(), 3);

        auth.logout().unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
        assert!(!auth.is_logged_in());
        assert_eq!(storage.get(TOKEN_KEY), None);
    }
}
