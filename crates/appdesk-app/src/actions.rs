//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every remote call runs on its own tokio task and reports back to the
//! event loop with a [`Message`]. Storage writes are synchronous.

use std::sync::Arc;

use tokio::sync::mpsc;

use appdesk_api::{ApplicationsGateway, Authenticator, Storage, THEME_KEY};
use appdesk_core::prelude::*;

use crate::export::write_report;
use crate::message::Message;
use crate::UpdateAction;

/// Gateways and storage the actions run against
pub struct Services<G, A> {
    pub applications: G,
    pub auth: Arc<A>,
    pub storage: Arc<dyn Storage>,
}

impl<G: Clone, A> Clone for Services<G, A> {
    fn clone(&self) -> Self {
        Self {
            applications: self.applications.clone(),
            auth: Arc::clone(&self.auth),
            storage: Arc::clone(&self.storage),
        }
    }
}

/// Execute an action, spawning a background task for remote calls
pub fn handle_action<G, A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<G, A>)
where
    G: ApplicationsGateway + Clone + Send + Sync + 'static,
    A: Authenticator + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadApplications => {
            let gateway = services.applications.clone();
            tokio::spawn(async move {
                let msg = match gateway.list().await {
                    Ok(applications) => Message::ApplicationsLoaded { applications },
                    Err(e) => Message::ApplicationsLoadFailed {
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CreateApplication { draft } => {
            let gateway = services.applications.clone();
            tokio::spawn(async move {
                let name = draft.name.clone();
                let msg = match gateway.create(draft).await {
                    Ok(()) => Message::ApplicationCreated { name },
                    Err(e) => mutation_failed("create application", &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::UpdateApplication { id, draft } => {
            let gateway = services.applications.clone();
            tokio::spawn(async move {
                let name = draft.name.clone();
                let msg = match gateway.update(id, draft).await {
                    Ok(()) => Message::ApplicationUpdated { name },
                    Err(e) => mutation_failed("update application", &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SetStatus { id, draft } => {
            let gateway = services.applications.clone();
            tokio::spawn(async move {
                let status = draft.status;
                let msg = match gateway.update(id, draft).await {
                    Ok(()) => Message::StatusToggled { id, status },
                    Err(e) => mutation_failed("change status", &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::DeleteApplication { id } => {
            let gateway = services.applications.clone();
            tokio::spawn(async move {
                let msg = match gateway.delete(id).await {
                    Ok(()) => Message::ApplicationDeleted { id },
                    Err(e) => mutation_failed("delete application", &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::NotifyRefresh { request, export } => {
            let gateway = services.applications.clone();
            tokio::spawn(async move {
                let notified = match gateway.relance(request).await {
                    Ok(response) => {
                        debug!("Relance acknowledged: {:?}", response.status);
                        true
                    }
                    Err(e) => {
                        warn!("Relance failed, syncing locally: {}", e);
                        false
                    }
                };
                let _ = msg_tx.send(Message::RelanceFinished { notified, export }).await;
            });
        }

        UpdateAction::ExportReport { path, html } => {
            tokio::spawn(async move {
                let msg = match write_report(&path, &html).await {
                    Ok(()) => Message::ReportExported { path },
                    Err(e) => Message::ExportFailed {
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SignIn { email, password } => {
            let auth = Arc::clone(&services.auth);
            tokio::spawn(async move {
                let msg = sign_in(auth.as_ref(), email, password).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::PersistTheme { theme } => {
            if let Err(e) = services.storage.set(THEME_KEY, theme.as_str()) {
                warn!("Failed to persist theme: {}", e);
            }
        }

        UpdateAction::Logout => {
            if let Err(e) = services.auth.logout() {
                warn!("Failed to clear session: {}", e);
            }
        }
    }
}

async fn sign_in<A: Authenticator>(auth: &A, email: String, password: String) -> Message {
    let response = match auth.sign_in(email, password).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Sign-in request failed: {}", e);
            return Message::LoginFailed {
                message: server_message(&e),
            };
        }
    };

    if let Err(e) = auth.set_current_user(response.user.clone(), &response.token) {
        return Message::LoginFailed {
            message: Some(e.user_message()),
        };
    }

    Message::LoginSucceeded {
        user: response.user,
        token: response.token,
    }
}

/// Message carried by an API error body, if any
fn server_message(error: &Error) -> Option<String> {
    match error {
        Error::Api { message, .. } if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

fn mutation_failed(what: &str, error: &Error) -> Message {
    Message::MutationFailed {
        error: format!("Failed to {}: {}", what, error.user_message()),
    }
}
