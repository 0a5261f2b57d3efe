//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::message::Message;
use crate::UpdateAction;
use sustrack_calc::CalculationService;
use sustrack_core::{ActivityInput, Error};

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: &Arc<S>)
where
    S: CalculationService + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitCalculation { input } => {
            spawn_calculation(input, msg_tx, Arc::clone(service));
        }
    }
}

/// POST one record and report the outcome back through the channel.
///
/// Exactly one request per call. A closed channel means the app is shutting
/// down, so the outcome is dropped.
pub fn spawn_calculation<S>(
    input: ActivityInput,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> JoinHandle<()>
where
    S: CalculationService + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match service.calculate(&input).await {
            Ok(result) => {
                info!(
                    "Calculation returned {} categories",
                    result.emissions.len()
                );
                Message::CalculationCompleted { result }
            }
            Err(e) => Message::CalculationFailed {
                error: e.to_string(),
            },
        };

        if let Err(e) = deliver(&msg_tx, msg).await {
            warn!("Calculation outcome dropped: {}", e);
        }
    })
}

async fn deliver(msg_tx: &mpsc::Sender<Message>, msg: Message) -> sustrack_core::Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}
