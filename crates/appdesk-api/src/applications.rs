//! Remote applications gateway
//!
//! Stateless translator between the dashboard and `/api/applications`.

use appdesk_core::prelude::*;
use appdesk_core::{Application, ApplicationDraft, ApplicationPatch, Status};
use reqwest::Method;
use serde_json::Value;

use crate::client::ApiClient;
use crate::protocol::{ListResponse, RelanceRequest, RelanceResponse};

const APPLICATIONS_PATH: &str = "/api/applications";
const RELANCE_PATH: &str = "/api/relance";

/// CRUD + relance operations on application records
#[trait_variant::make(ApplicationsGateway: Send)]
pub trait LocalApplicationsGateway {
    /// Fetch every record
    async fn list(&self) -> Result<Vec<Application>>;

    /// Create a record; the server assigns `id` and `created_at`
    async fn create(&self, draft: ApplicationDraft) -> Result<()>;

    /// Replace a record with a full draft
    async fn update(&self, id: i64, draft: ApplicationDraft) -> Result<()>;

    /// Send only the fields present in `patch`
    async fn update_partial(&self, id: i64, patch: ApplicationPatch) -> Result<()>;

    /// Partial update carrying just the new status
    async fn toggle_status(&self, id: i64, next: Status) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;

    /// Best-effort refresh notification
    async fn relance(&self, request: RelanceRequest) -> Result<RelanceResponse>;
}

/// [`ApplicationsGateway`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpApplicationsGateway {
    client: ApiClient,
}

impl HttpApplicationsGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn record_path(id: i64) -> String {
        format!("{}/{}", APPLICATIONS_PATH, id)
    }
}

impl ApplicationsGateway for HttpApplicationsGateway {
    async fn list(&self) -> Result<Vec<Application>> {
        let response: ListResponse = self.client.get(APPLICATIONS_PATH).await?;
        let apps = response.into_applications();
        debug!("Loaded {} applications", apps.len());
        Ok(apps)
    }

    async fn create(&self, draft: ApplicationDraft) -> Result<()> {
        let _: Value = self
            .client
            .send(Method::POST, APPLICATIONS_PATH, &draft)
            .await?;
        info!("Created application '{}'", draft.name);
        Ok(())
    }

    async fn update(&self, id: i64, draft: ApplicationDraft) -> Result<()> {
        let _: Value = self
            .client
            .send(Method::PUT, &Self::record_path(id), &draft)
            .await?;
        info!("Updated application {}", id);
        Ok(())
    }

    async fn update_partial(&self, id: i64, patch: ApplicationPatch) -> Result<()> {
        let _: Value = self
            .client
            .send(Method::PUT, &Self::record_path(id), &patch)
            .await?;
        debug!("Patched application {}", id);
        Ok(())
    }

    async fn toggle_status(&self, id: i64, next: Status) -> Result<()> {
        ApplicationsGateway::update_partial(self, id, ApplicationPatch::status(next)).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&Self::record_path(id)).await?;
        info!("Deleted application {}", id);
        Ok(())
    }

    async fn relance(&self, request: RelanceRequest) -> Result<RelanceResponse> {
        let value: Value = self.client.send(Method::POST, RELANCE_PATH, &request).await?;
        // Anything that is not an object still counts as a delivered notification
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}
