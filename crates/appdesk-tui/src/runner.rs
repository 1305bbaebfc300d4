//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use appdesk_api::{ApplicationsGateway, Authenticator};
use appdesk_app::message::Message;
use appdesk_app::signals;
use appdesk_app::state::AppState;
use appdesk_app::{process_message, Services};
use appdesk_core::prelude::*;

use super::{event, render, terminal};

/// Run the dashboard until the user quits.
///
/// A restored session starts on the dashboard, so the first load is
/// queued before the loop starts.
pub async fn run<G, A>(mut state: AppState, services: Services<G, A>) -> Result<()>
where
    G: ApplicationsGateway + Clone + Send + Sync + 'static,
    A: Authenticator + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    // Unified message channel (signal handler, action results)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());

    if state.is_dashboard() {
        info!("Restored session, loading applications");
        process_message(&mut state, Message::LoadApplications, &msg_tx, &services);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &services);

    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<G, A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<G, A>,
) -> Result<()>
where
    G: ApplicationsGateway + Clone + Send + Sync + 'static,
    A: Authenticator + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results of spawned actions and OS signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, services);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, services);
        }
    }

    Ok(())
}
