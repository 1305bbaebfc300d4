//! Headless runs against a local mock of the REST API

use std::sync::{Arc, Mutex};

use appdesk::headless::runner::run_with_output;
use appdesk::{connect, open_storage, stored_session};
use appdesk_api::{Storage, TOKEN_KEY, USER_KEY};
use appdesk_app::Settings;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::tempdir;

type Seen = Arc<Mutex<Vec<Option<String>>>>;

async fn list(State(seen): State<Seen>, headers: HeaderMap) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().unwrap().push(auth.clone());

    if auth.as_deref() != Some("Bearer jwt-token") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "Token expired"})))
            .into_response();
    }
    Json(json!({
        "success": true,
        "data": [
            {"id": 1, "name": "Fleet", "theme": "Ops", "performance": "Excellent",
             "department": "Transport", "status": "active"},
            {"id": 2, "name": "Stock", "theme": "WMS", "performance": "Bon",
             "department": "Logistique", "status": "active"},
            {"id": 3, "name": "Portal", "theme": "Web", "performance": "Faible",
             "department": "Global", "status": "inactive"}
        ]
    }))
    .into_response()
}

async fn start_api() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/api/applications", get(list))
        .with_state(Arc::clone(&seen));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}

fn lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(out)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[tokio::test]
async fn test_stored_token_loads_and_exports() {
    let (base_url, seen) = start_api().await;
    let dir = tempdir().unwrap();
    let storage_path = dir.path().join("storage.json");

    // A previous run left a session on disk
    open_storage(Some(storage_path.clone()))
        .set(TOKEN_KEY, "jwt-token")
        .unwrap();

    let services = connect(&base_url, open_storage(Some(storage_path))).unwrap();
    let stored = stored_session(services.storage.as_ref(), &services.auth);

    let mut settings = Settings::default();
    settings.export.directory = Some(dir.path().join("reports"));

    let mut out = Vec::new();
    run_with_output(&services.applications, &stored, &settings, true, &mut out)
        .await
        .unwrap();

    assert_eq!(seen.lock().unwrap().as_slice(), [Some("Bearer jwt-token".to_string())]);

    let events = lines(&out);
    let kinds: Vec<_> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, ["applications_loaded", "summary", "export_written"]);
    assert_eq!(events[1]["total"], 3);
    assert_eq!(events[1]["active"], 2);
    assert_eq!(events[1]["departments"], 3);
    assert_eq!(events[1]["average_performance"], "Bon");

    let report = dir.path().join("reports").join("resultats.doc");
    let html = std::fs::read_to_string(report).unwrap();
    assert!(html.contains("Portal"));
}

#[tokio::test]
async fn test_rejected_token_surfaces_server_message() {
    let (base_url, _seen) = start_api().await;
    let dir = tempdir().unwrap();
    let storage = open_storage(Some(dir.path().join("storage.json")));
    storage.set(TOKEN_KEY, "stale").unwrap();

    let services = connect(&base_url, storage).unwrap();
    let stored = stored_session(services.storage.as_ref(), &services.auth);

    let mut out = Vec::new();
    let result =
        run_with_output(&services.applications, &stored, &Settings::default(), false, &mut out)
            .await;

    assert!(result.is_err());
    let events = lines(&out);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["message"], "Token expired");
}

#[tokio::test]
async fn test_logout_clears_persisted_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let storage = open_storage(Some(path.clone()));
    storage.set(TOKEN_KEY, "jwt-token").unwrap();
    storage
        .set(
            USER_KEY,
            r#"{"id":5,"email":"ada@example.com","name":"Ada","role":"admin","department":"All"}"#,
        )
        .unwrap();

    let services = connect("http://localhost:3000", storage).unwrap();
    assert!(services.auth.current_user().is_some());
    services.auth.logout().unwrap();

    let reopened = open_storage(Some(path));
    assert_eq!(reopened.get(TOKEN_KEY), None);
    assert_eq!(reopened.get(USER_KEY), None);
}
