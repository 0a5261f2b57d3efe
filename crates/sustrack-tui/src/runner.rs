//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::sync::Arc;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use sustrack_app::config::Settings;
use sustrack_app::message::Message;
use sustrack_app::process::process_message;
use sustrack_app::signals;
use sustrack_app::state::AppState;
use sustrack_calc::CalculationService;
use sustrack_core::prelude::*;

use crate::{event, render, terminal};

/// Run the tracker UI until the user quits
pub async fn run<S>(base_dir: &Path, settings: Settings, service: S) -> Result<()>
where
    S: CalculationService + Send + Sync + 'static,
{
    let mut state = AppState::new(base_dir, settings);
    info!(
        "Starting TUI: {} topics, {} images resolved, endpoint {}",
        state.registry.len(),
        state.assets.available_count(),
        state.endpoint_label
    );

    let mut term = terminal::init()?;

    // Unified message channel for signal handler and background calculations
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let service = Arc::new(service);
    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &service);

    terminal::restore();
    info!("TUI exited");
    result
}

/// Drain pending messages, draw, then wait up to one poll interval for input
fn run_loop<S>(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) -> Result<()>
where
    S: CalculationService + Send + Sync + 'static,
{
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, service);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, service);
        }
    }

    Ok(())
}
