pub mod board;

pub use board::{action_for, board_bindings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    NavigateLeft,
    NavigateRight,
    NavigateDown,
    NavigateUp,
    ScrollDetailDown,
    ScrollDetailUp,
    Refresh,
    OpenProject,
    OpenCard,
    MoveCardForward,
    MoveCardBackward,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: &'static str,
    pub description: &'static str,
    pub action: KeybindingAction,
}

impl Keybinding {
    pub const fn new(key: &'static str, description: &'static str, action: KeybindingAction) -> Self {
        Self {
            key,
            description,
            action,
        }
    }
}
