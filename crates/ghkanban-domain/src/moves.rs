//! Move coordinator: turns a move keystroke into a remote move request and
//! tracks the per-card pending/failed markers until the result comes back.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::board::Board;
use crate::focus::{wrap_index, FocusState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
}

impl MoveDirection {
    fn is_forward(self) -> bool {
        matches!(self, MoveDirection::Forward)
    }
}

/// Where in the destination column the card lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Top,
    Bottom,
}

impl CardPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            CardPosition::Top => "top",
            CardPosition::Bottom => "bottom",
        }
    }
}

impl fmt::Display for CardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub card_id: u64,
    pub source_column: usize,
    pub destination_column: usize,
    pub destination_column_id: u64,
    pub position: CardPosition,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    #[error("no board loaded")]
    NoBoard,

    #[error("no card selected")]
    NoCardSelected,

    #[error("the selected card has no usable id")]
    UnresolvedCard,

    #[error("column {0:?} has no usable id")]
    UnresolvedColumn(String),

    #[error("card is already being moved")]
    AlreadyPending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Succeeded,
    Failed(String),
}

/// Result of one remote move, delivered back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub card_id: u64,
    pub outcome: MoveOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMarker {
    Pending,
    Failed,
}

/// Compute the move for the focused card. Destination follows the same
/// wrap-around rule as focus navigation.
pub fn plan_move(
    board: &Board,
    focus: &FocusState,
    direction: MoveDirection,
) -> Result<MoveRequest, MoveRejected> {
    let source_column = focus.focused_column().ok_or(MoveRejected::NoBoard)?;
    let card = focus
        .selected_card(board)
        .ok_or(MoveRejected::NoCardSelected)?;
    let card_id = card.id.get().ok_or(MoveRejected::UnresolvedCard)?;

    let destination_column =
        wrap_index(source_column, board.column_count(), direction.is_forward());
    let destination = board
        .column(destination_column)
        .ok_or(MoveRejected::NoBoard)?;
    let destination_column_id = destination
        .id
        .get()
        .ok_or_else(|| MoveRejected::UnresolvedColumn(destination.name.clone()))?;

    Ok(MoveRequest {
        card_id,
        source_column,
        destination_column,
        destination_column_id,
        position: CardPosition::Top,
    })
}

#[derive(Debug, Clone, Default)]
pub struct MoveTracker {
    markers: HashMap<u64, MoveMarker>,
}

impl MoveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(&self, card_id: u64) -> Option<MoveMarker> {
        self.markers.get(&card_id).copied()
    }

    pub fn is_pending(&self, card_id: u64) -> bool {
        self.marker(card_id) == Some(MoveMarker::Pending)
    }

    pub fn pending_count(&self) -> usize {
        self.markers
            .values()
            .filter(|m| **m == MoveMarker::Pending)
            .count()
    }

    pub fn mark_pending(&mut self, card_id: u64) {
        self.markers.insert(card_id, MoveMarker::Pending);
    }

    /// Clear the marker on success, flag it on failure.
    pub fn resolve(&mut self, result: &MoveResult) {
        match result.outcome {
            MoveOutcome::Succeeded => {
                self.markers.remove(&result.card_id);
            }
            MoveOutcome::Failed(_) => {
                self.markers.insert(result.card_id, MoveMarker::Failed);
            }
        }
    }

    pub fn clear_failed(&mut self) {
        self.markers.retain(|_, marker| *marker != MoveMarker::Failed);
    }

    /// Forget failed markers for cards that are no longer on the board.
    /// Pending markers stay until their result arrives.
    pub fn retain_visible(&mut self, board: &Board) {
        let visible: Vec<u64> = board
            .columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .filter_map(|card| card.id.get())
            .collect();
        self.markers
            .retain(|id, marker| *marker == MoveMarker::Pending || visible.contains(id));
    }
}
