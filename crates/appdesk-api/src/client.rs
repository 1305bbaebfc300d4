//! Shared HTTP plumbing for the REST gateways
//!
//! Every request reads the current token from [`Storage`] and attaches
//! `Authorization: Bearer <token>` when one is stored. No retries, no
//! timeouts, no caching.

use std::sync::Arc;

use appdesk_core::prelude::*;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::storage::{Storage, TOKEN_KEY};

/// Default API base when neither config nor CLI provide one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Base URL + bearer-aware request builder
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client for `base_url` (scheme + host, optional path prefix)
    pub fn new(base_url: &str, storage: Arc<dyn Storage>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            storage,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Absolute URL for an `/api/...` path, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the stored bearer token, if any
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.storage.get(TOKEN_KEY) {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        trace!("{} {}", method, url);
        self.authorize(self.http.request(method, url))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    pub async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(method, path)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(transport_error)?;
        read_json::<serde_json::Value>(response).await.map(|_| ())
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    Error::http(e.to_string())
}

/// Decode a response body, mapping non-2xx statuses to [`Error::Api`].
///
/// An empty success body decodes as JSON `null`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_default();
        debug!("API returned {}: {}", status, message);
        return Err(Error::api(status.as_u16(), message));
    }

    let body = if body.trim().is_empty() { "null" } else { &body };
    serde_json::from_str(body).map_err(|e| Error::protocol(e.to_string()))
}

/// `message` field of a JSON error body
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        assert_eq!(
            client("http://localhost:3000").endpoint("/api/applications"),
            "http://localhost:3000/api/applications"
        );
        assert_eq!(
            client("http://host/prefix/").endpoint("/api/relance"),
            "http://host/prefix/api/relance"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = ApiClient::new("not a url", Arc::new(MemoryStorage::new())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert_eq!(error_message(r#"{"message":""}"#), None);
        assert_eq!(error_message("<html>"), None);
    }
}
