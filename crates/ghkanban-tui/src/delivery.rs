//! Messages sent from background network tasks to the UI loop.

use std::sync::Arc;

use ghkanban_api::{ApiError, CardMover, ProjectQuery, ProjectSource};
use ghkanban_domain::{MoveOutcome, MoveRequest, MoveResult, ProjectTree};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum Delivery {
    Fetched {
        seq: u64,
        result: Result<ProjectTree, ApiError>,
    },
    Moved(MoveResult),
}

/// Fetch the project on a background task and deliver the result tagged with
/// `seq`.
pub fn spawn_fetch(
    source: Arc<dyn ProjectSource>,
    query: ProjectQuery,
    seq: u64,
    tx: UnboundedSender<Delivery>,
) {
    tokio::spawn(async move {
        let result = source.fetch_project(&query).await;
        if tx.send(Delivery::Fetched { seq, result }).is_err() {
            tracing::debug!("UI loop gone; dropping refresh #{}", seq);
        }
    });
}

pub fn spawn_move(mover: Arc<dyn CardMover>, request: MoveRequest, tx: UnboundedSender<Delivery>) {
    tokio::spawn(async move {
        let outcome = match mover
            .move_card(
                request.card_id,
                request.destination_column_id,
                request.position,
            )
            .await
        {
            Ok(()) => MoveOutcome::Succeeded,
            Err(e) => MoveOutcome::Failed(e.to_string()),
        };
        let result = MoveResult {
            card_id: request.card_id,
            outcome,
        };
        if tx.send(Delivery::Moved(result)).is_err() {
            tracing::debug!("UI loop gone; dropping move result");
        }
    });
}
