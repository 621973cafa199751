pub mod board;
pub mod card;
pub mod column;
pub mod focus;
pub mod moves;
pub mod node_id;
pub mod refresh;
pub mod state;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use board::Board;
pub use card::{Card, NOTE_MARKER};
pub use column::Column;
pub use focus::{Focus, FocusState, Position};
pub use moves::{
    plan_move, CardPosition, MoveDirection, MoveMarker, MoveOutcome, MoveRejected, MoveRequest,
    MoveResult, MoveTracker,
};
pub use node_id::{decode_node_id, NodeIdError, NodeKind, RemoteId};
pub use refresh::{Admission, BoardView, RefreshTracker};
pub use state::{BoardState, DeliveryOutcome};
pub use tree::{Assignee, Label, ProjectTree, RawCard, RawColumn};
