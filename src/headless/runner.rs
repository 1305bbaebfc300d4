//! Headless mode runner - one load, optional export, then exit

use std::io::Write;

use tracing::{error, info};

use appdesk_api::ApplicationsGateway;
use appdesk_app::export::{render_report, write_report};
use appdesk_app::{DashboardState, Settings, StoredSession};
use appdesk_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode, writing events to stdout
pub async fn run_headless<G: ApplicationsGateway>(
    gateway: &G,
    stored: &StoredSession,
    settings: &Settings,
    export: bool,
) -> Result<()> {
    let mut stdout = std::io::stdout();
    run_with_output(gateway, stored, settings, export, &mut stdout).await
}

/// Headless flow against any writer.
///
/// Every failure is reported as an `error` event before being returned.
pub async fn run_with_output<G, W>(
    gateway: &G,
    stored: &StoredSession,
    settings: &Settings,
    export: bool,
    out: &mut W,
) -> Result<()>
where
    G: ApplicationsGateway,
    W: Write,
{
    info!("appdesk starting in headless mode");

    let result = load_and_report(gateway, stored, settings, export, out).await;
    if let Err(ref e) = result {
        error!("Headless run failed: {}", e);
        HeadlessEvent::error(e.user_message(), true).write_to(out)?;
    }
    result
}

async fn load_and_report<G, W>(
    gateway: &G,
    stored: &StoredSession,
    settings: &Settings,
    export: bool,
    out: &mut W,
) -> Result<()>
where
    G: ApplicationsGateway,
    W: Write,
{
    if !stored.has_token() {
        return Err(Error::Unauthorized);
    }

    let applications = gateway.list().await?;
    HeadlessEvent::applications_loaded(applications.len()).write_to(out)?;

    let mut dashboard = DashboardState::new(stored.is_admin());
    dashboard.set_applications(applications);
    HeadlessEvent::summary(
        dashboard.applications.len(),
        dashboard.active_count(),
        dashboard.inactive_count(),
        dashboard.unique_departments().len(),
        dashboard.average_performance(),
    )
    .write_to(out)?;

    if export {
        let path = settings.export.resolve_path();
        let html = render_report(
            dashboard.page_title(),
            &dashboard.section_applications(),
        );
        write_report(&path, &html).await?;
        HeadlessEvent::export_written(&path).write_to(out)?;
    }

    Ok(())
}
