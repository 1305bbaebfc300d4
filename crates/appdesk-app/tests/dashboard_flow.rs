//! End-to-end message flows through `process_message` with fake gateways

use std::sync::{Arc, Mutex};
use std::time::Duration;

use appdesk_api::{
    ApplicationsGateway, Authenticator, MemoryStorage, RelanceRequest, RelanceResponse,
    SignInResponse,
};
use appdesk_app::{process_message, AppState, Message, Services, UiMode};
use appdesk_core::prelude::*;
use appdesk_core::{Application, ApplicationDraft, ApplicationPatch, Status, User};
use tokio::sync::mpsc;
use tokio::time::timeout;

#[derive(Clone)]
struct RecordingGateway {
    apps: Arc<Mutex<Vec<Application>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingGateway {
    fn with(apps: Vec<Application>) -> Self {
        Self {
            apps: Arc::new(Mutex::new(apps)),
            calls: Arc::default(),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ApplicationsGateway for RecordingGateway {
    async fn list(&self) -> Result<Vec<Application>> {
        self.push("list".into());
        Ok(self.apps.lock().unwrap().clone())
    }

    async fn create(&self, draft: ApplicationDraft) -> Result<()> {
        self.push(format!("create {}", draft.name));
        Ok(())
    }

    async fn update(&self, id: i64, draft: ApplicationDraft) -> Result<()> {
        self.push(format!("update {} {}", id, draft.status.as_str()));
        Ok(())
    }

    async fn update_partial(&self, id: i64, _patch: ApplicationPatch) -> Result<()> {
        self.push(format!("patch {}", id));
        Ok(())
    }

    async fn toggle_status(&self, id: i64, next: Status) -> Result<()> {
        self.push(format!("toggle {} {}", id, next.as_str()));
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.push(format!("delete {}", id));
        Ok(())
    }

    async fn relance(&self, _request: RelanceRequest) -> Result<RelanceResponse> {
        self.push("relance".into());
        Err(Error::http("connection refused"))
    }
}

struct NoAuth;

impl Authenticator for NoAuth {
    async fn sign_in(&self, _email: String, _password: String) -> Result<SignInResponse> {
        Err(Error::http("offline"))
    }

    fn set_current_user(&self, _user: User, _token: &str) -> Result<()> {
        Ok(())
    }

    fn logout(&self) -> Result<()> {
        Ok(())
    }
}

fn app(id: i64, name: &str, status: Status) -> Application {
    Application {
        id: Some(id),
        name: name.into(),
        theme: "Ops".into(),
        performance: "Bon".into(),
        department: "Transport".into(),
        status,
        created_at: None,
    }
}

fn setup(is_admin: bool) -> (AppState, RecordingGateway, Services<RecordingGateway, NoAuth>) {
    let gateway = RecordingGateway::with(vec![
        app(1, "Fleet", Status::Active),
        app(2, "Routes", Status::Active),
    ]);
    let services = Services {
        applications: gateway.clone(),
        auth: Arc::new(NoAuth),
        storage: Arc::new(MemoryStorage::new()),
    };
    let mut state = AppState::new();
    state.enter_dashboard(is_admin, None);
    (state, gateway, services)
}

/// Feed replies back until `done` holds
async fn drain(
    state: &mut AppState,
    rx: &mut mpsc::Receiver<Message>,
    tx: &mpsc::Sender<Message>,
    services: &Services<RecordingGateway, NoAuth>,
    done: impl Fn(&AppState) -> bool,
) {
    while !done(state) {
        let msg = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out")
            .expect("closed");
        process_message(state, msg, tx, services);
    }
}

#[tokio::test]
async fn toggle_status_sends_inactive_and_patches_locally() {
    let (mut state, gateway, services) = setup(true);
    let (tx, mut rx) = mpsc::channel(16);

    process_message(&mut state, Message::LoadApplications, &tx, &services);
    drain(&mut state, &mut rx, &tx, &services, |s| {
        s.dashboard.applications.len() == 2
    })
    .await;

    process_message(&mut state, Message::ToggleSelectedStatus, &tx, &services);
    drain(&mut state, &mut rx, &tx, &services, |s| {
        s.dashboard.pending_changes
    })
    .await;

    assert_eq!(state.dashboard.applications[0].status, Status::Inactive);
    assert_eq!(state.dashboard.applications[1].status, Status::Active);
    // No reload after a status change
    assert_eq!(gateway.calls(), vec!["list", "update 1 inactive"]);
}

#[tokio::test]
async fn non_admin_mutations_never_reach_the_gateway() {
    let (mut state, gateway, services) = setup(false);
    let (tx, mut rx) = mpsc::channel(16);

    process_message(&mut state, Message::LoadApplications, &tx, &services);
    drain(&mut state, &mut rx, &tx, &services, |s| {
        !s.dashboard.applications.is_empty()
    })
    .await;

    for msg in [Message::ToggleSelectedStatus, Message::RequestDeleteSelected] {
        process_message(&mut state, msg, &tx, &services);
        assert_eq!(state.ui_mode, UiMode::Notice);
        process_message(&mut state, Message::DismissNotice, &tx, &services);
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(gateway.calls(), vec!["list"]);
}

#[tokio::test]
async fn refresh_with_unreachable_api_syncs_locally() {
    let (mut state, gateway, services) = setup(true);
    state.dashboard.pending_changes = true;
    let (tx, mut rx) = mpsc::channel(16);

    process_message(&mut state, Message::Refresh { export: false }, &tx, &services);
    assert!(state.dashboard.refreshing);

    drain(&mut state, &mut rx, &tx, &services, |s| {
        !s.dashboard.applications.is_empty()
    })
    .await;

    assert!(!state.dashboard.refreshing);
    assert!(!state.dashboard.pending_changes);
    assert_eq!(gateway.calls(), vec!["relance", "list"]);
    assert_eq!(
        state.dashboard.history.latest().unwrap().summary(),
        "Local sync: API unavailable"
    );
}
