//! Startup wiring: storage, gateways and the persisted session

use std::path::PathBuf;
use std::sync::Arc;

use appdesk_api::{
    ApiClient, AuthGateway, FileStorage, HttpApplicationsGateway, MemoryStorage, Storage,
    ROLE_KEY, THEME_KEY, TOKEN_KEY,
};
use appdesk_app::{Services, StoredSession};
use appdesk_core::prelude::*;

/// Services backed by the HTTP gateways
pub type HttpServices = Services<HttpApplicationsGateway, AuthGateway>;

/// Open file storage at `path` (or the default location).
///
/// Falls back to process memory when no data directory is known.
pub fn open_storage(path: Option<PathBuf>) -> Arc<dyn Storage> {
    match path.or_else(FileStorage::default_path) {
        Some(path) => Arc::new(FileStorage::open(path)),
        None => {
            warn!("No data directory available, session will not persist");
            Arc::new(MemoryStorage::new())
        }
    }
}

/// Build the HTTP gateways over a shared storage
pub fn connect(base_url: &str, storage: Arc<dyn Storage>) -> Result<HttpServices> {
    let client = ApiClient::new(base_url, Arc::clone(&storage))?;
    info!("Using API at {}", client.base_url());

    Ok(Services {
        applications: HttpApplicationsGateway::new(client.clone()),
        auth: Arc::new(AuthGateway::new(client)),
        storage,
    })
}

/// Read the values a previous run left in storage
pub fn stored_session(storage: &dyn Storage, auth: &AuthGateway) -> StoredSession {
    StoredSession {
        token: storage.get(TOKEN_KEY).filter(|t| !t.is_empty()),
        role: storage.get(ROLE_KEY),
        theme: storage.get(THEME_KEY),
        user: auth.current_user(),
    }
}
