//! Application records managed by the dashboard
//!
//! An [`Application`] is what the remote store returns. The client never
//! sends `id` or `created_at`: creation and full updates use
//! [`ApplicationDraft`], partial updates use [`ApplicationPatch`].

use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Known department labels. Departments are free text on the wire, these are
/// the conventional values.
pub const DEPARTMENT_TRANSPORT: &str = "Transport";
pub const DEPARTMENT_LOGISTIQUE: &str = "Logistique";
pub const DEPARTMENT_GLOBAL: &str = "Global";

/// The three departments an application can conventionally belong to.
pub const KNOWN_DEPARTMENTS: [&str; 3] =
    [DEPARTMENT_TRANSPORT, DEPARTMENT_LOGISTIQUE, DEPARTMENT_GLOBAL];

/// Activation status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered qualitative performance scale.
///
/// Ordering follows the score: `Faible < Moyen < Bon < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Performance {
    Faible,
    Moyen,
    #[default]
    Bon,
    Excellent,
}

impl Performance {
    pub const ALL: [Performance; 4] = [
        Performance::Faible,
        Performance::Moyen,
        Performance::Bon,
        Performance::Excellent,
    ];

    /// Parse an exact wire label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Faible" => Some(Performance::Faible),
            "Moyen" => Some(Performance::Moyen),
            "Bon" => Some(Performance::Bon),
            "Excellent" => Some(Performance::Excellent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Performance::Faible => "Faible",
            Performance::Moyen => "Moyen",
            Performance::Bon => "Bon",
            Performance::Excellent => "Excellent",
        }
    }

    /// Numeric score used by the averaging computation (1..=4)
    pub fn score(&self) -> u8 {
        match self {
            Performance::Faible => 1,
            Performance::Moyen => 2,
            Performance::Bon => 3,
            Performance::Excellent => 4,
        }
    }

    /// Next label on the scale, wrapping around (used by the edit form)
    pub fn next(&self) -> Self {
        match self {
            Performance::Faible => Performance::Moyen,
            Performance::Moyen => Performance::Bon,
            Performance::Bon => Performance::Excellent,
            Performance::Excellent => Performance::Faible,
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A managed application record as stored remotely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performance: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Application {
    /// Parsed performance label, `None` for unknown or empty labels
    pub fn performance_level(&self) -> Option<Performance> {
        Performance::parse(&self.performance)
    }

    /// Creation date in local time, when the server timestamp is parseable.
    ///
    /// Accepts RFC 3339 (`2025-10-21T08:03:48.000Z`) and plain dates.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Local).date_naive());
        }
        raw.get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    }

    /// Client-side body for this record, dropping server-owned fields
    pub fn to_draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            name: self.name.clone(),
            theme: self.theme.clone(),
            performance: self.performance.clone(),
            department: self.department.clone(),
            status: self.status,
        }
    }
}

/// Application fields the client is allowed to send (no `id`, no `created_at`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub name: String,
    pub theme: String,
    pub performance: String,
    pub department: String,
    pub status: Status,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            theme: String::new(),
            performance: Performance::default().label().to_string(),
            department: String::new(),
            status: Status::Active,
        }
    }
}

impl ApplicationDraft {
    /// Name and department are the only required fields
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty() && !self.department.is_empty()
    }

    /// Same draft with only the status replaced
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// Partial update body; absent fields are not serialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl ApplicationPatch {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggle() {
        assert_eq!(Status::Active.toggled(), Status::Inactive);
        assert_eq!(Status::Inactive.toggled(), Status::Active);
    }

    #[test]
    fn test_performance_ordering_follows_score() {
        assert!(Performance::Faible < Performance::Moyen);
        assert!(Performance::Bon < Performance::Excellent);
        for p in Performance::ALL {
            assert_eq!(Performance::parse(p.label()), Some(p));
        }
        assert_eq!(Performance::parse("excellent"), None);
    }

    #[test]
    fn test_deserialize_server_record() {
        let json = r#"{
            "id": 2,
            "name": "TrackIt",
            "theme": "Suivi",
            "performance": "Excellent",
            "department": "Global",
            "status": "active",
            "created_at": "2025-10-21T08:03:48.000Z"
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.id, Some(2));
        assert_eq!(app.status, Status::Active);
        assert_eq!(app.performance_level(), Some(Performance::Excellent));
        assert!(app.created_date().is_some());
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let app: Application =
            serde_json::from_str(r#"{"name": "Bare", "status": "inactive"}"#).unwrap();
        assert_eq!(app.id, None);
        assert_eq!(app.theme, "");
        assert_eq!(app.status, Status::Inactive);
        assert_eq!(app.performance_level(), None);
        assert_eq!(app.created_date(), None);
    }

    #[test]
    fn test_deserialize_tolerates_null_fields() {
        let json = r#"{
            "id": 3,
            "name": "Fleet",
            "theme": null,
            "performance": null,
            "department": null,
            "status": null,
            "created_at": null
        }"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.theme, "");
        assert_eq!(app.department, "");
        assert_eq!(app.status, Status::Active);
        assert_eq!(app.performance_level(), None);
    }

    #[test]
    fn test_draft_never_carries_server_fields() {
        let app = Application {
            id: Some(7),
            name: "Fleet".into(),
            theme: "Ops".into(),
            performance: "Moyen".into(),
            department: "Transport".into(),
            status: Status::Active,
            created_at: Some("2025-01-01T00:00:00Z".into()),
        };
        let body = serde_json::to_value(app.to_draft()).unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("created_at").is_none());
        assert_eq!(body["status"], "active");
    }

    #[test]
    fn test_draft_defaults_and_required_fields() {
        let draft = ApplicationDraft::default();
        assert_eq!(draft.performance, "Bon");
        assert_eq!(draft.status, Status::Active);
        assert!(!draft.is_submittable());

        let draft = ApplicationDraft {
            name: "X".into(),
            department: "Global".into(),
            ..ApplicationDraft::default()
        };
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let body = serde_json::to_string(&ApplicationPatch::status(Status::Inactive)).unwrap();
        assert_eq!(body, r#"{"status":"inactive"}"#);
    }

    #[test]
    fn test_created_date_accepts_plain_date() {
        let app = Application {
            id: None,
            name: "A".into(),
            theme: String::new(),
            performance: String::new(),
            department: String::new(),
            status: Status::Active,
            created_at: Some("2024-03-05 10:00:00".into()),
        };
        assert_eq!(
            app.created_date(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }
}
