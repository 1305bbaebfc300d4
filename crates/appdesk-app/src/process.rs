//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use appdesk_api::{ApplicationsGateway, Authenticator};

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up it produces
pub fn process_message<G, A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<G, A>,
) where
    G: ApplicationsGateway + Clone + Send + Sync + 'static,
    A: Authenticator + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
