//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use roster_app::config::Settings;
use roster_app::message::Message;
use roster_app::process::process_message;
use roster_app::signals;
use roster_app::state::AppState;
use roster_app::Screen;
use roster_client::{HttpUserDirectory, UserDirectory};
use roster_core::prelude::*;

use super::{event, render};

/// Capacity of the channel background tasks report on
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the console against the backend named in `settings`, starting on
/// `initial`
///
/// An unusable base URL fails before the terminal is touched.
pub async fn run(settings: Settings, initial: Screen) -> Result<()> {
    let directory = Arc::new(HttpUserDirectory::new(
        &settings.api.base_url,
        settings.api.timeout(),
    )?);
    info!(
        "Starting console against {} (page size {})",
        directory.base_url(),
        settings.listing.page_size
    );

    // Also installs a panic hook that restores the terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
    signals::spawn_signal_handler(msg_tx.clone());

    // Mounting the listing issues the first fetch
    process_message(&mut state, Message::Navigate(initial), &msg_tx, &directory);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &directory);

    ratatui::restore();
    info!("Console closed");
    result
}

/// Main event loop
fn run_loop<D>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    directory: &Arc<D>,
) -> Result<()>
where
    D: UserDirectory + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from background requests and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, directory);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, directory);
        }
    }

    Ok(())
}
