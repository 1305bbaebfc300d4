//! Wire types of the REST API

use appdesk_core::{Application, User};
use serde::{Deserialize, Serialize};

/// `GET /api/applications`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Option<Vec<Application>>,
    #[serde(default)]
    pub success: bool,
}

impl ListResponse {
    /// Records carried by the response; a missing `data` field is an empty list
    pub fn into_applications(self) -> Vec<Application> {
        self.data.unwrap_or_default()
    }
}

/// `POST /api/user/signin` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Why a relance was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelanceReason {
    /// Local mutations happened since the last refresh
    ApplyChanges,
    Manual,
}

impl RelanceReason {
    pub fn for_pending(pending: bool) -> Self {
        if pending {
            RelanceReason::ApplyChanges
        } else {
            RelanceReason::Manual
        }
    }
}

/// `POST /api/relance` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelanceRequest {
    pub reason: RelanceReason,
    pub pending: bool,
    /// RFC 3339 send time
    pub timestamp: String,
}

impl RelanceRequest {
    pub fn new(pending: bool, timestamp: chrono::DateTime<chrono::Local>) -> Self {
        Self {
            reason: RelanceReason::for_pending(pending),
            pending,
            timestamp: timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelanceResponse {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_list_response_without_data_is_empty() {
        let response: ListResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.into_applications().is_empty());
    }

    #[test]
    fn test_list_response_with_null_fields_still_decodes() {
        let json = r#"{
            "success": true,
            "data": [
                {"id": 1, "name": "Fleet", "theme": null, "performance": null,
                 "department": "Global", "status": "active"}
            ]
        }"#;
        let response: ListResponse = serde_json::from_str(json).unwrap();
        let apps = response.into_applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].theme, "");
        let refs: Vec<&Application> = apps.iter().collect();
        assert_eq!(appdesk_core::average_performance(&refs), "Moyen");
    }

    #[test]
    fn test_list_response_with_null_data_is_empty() {
        let response: ListResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.into_applications().is_empty());
    }

    #[test]
    fn test_relance_body_shape() {
        let ts = Local.with_ymd_and_hms(2025, 10, 21, 9, 30, 0).unwrap();
        let body = serde_json::to_value(RelanceRequest::new(true, ts)).unwrap();
        assert_eq!(body["reason"], "apply-changes");
        assert_eq!(body["pending"], true);
        assert!(body["timestamp"].as_str().unwrap().starts_with("2025-10-21T09:30:00"));

        let body = serde_json::to_value(RelanceRequest::new(false, ts)).unwrap();
        assert_eq!(body["reason"], "manual");
    }

    #[test]
    fn test_sign_in_response_parses_user() {
        let json = r#"{
            "message": "ok",
            "token": "t.k.n",
            "user": {"id": 3, "email": "a@b.c", "name": "A", "role": "employee", "department": "Transport"}
        }"#;
        let response: SignInResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "t.k.n");
        assert!(response.user.is_employee());
    }
}
