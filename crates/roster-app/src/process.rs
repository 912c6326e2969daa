//! Message processing
//!
//! Runs a message through the TEA update function, follows up on any
//! chained messages, and dispatches the resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use roster_client::UserDirectory;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<D>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    directory: &Arc<D>,
) where
    D: UserDirectory + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(directory));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
