//! Focus state machine.
//!
//! Tracks the active column and a row cursor per column. Focus survives
//! board replacement: [`FocusState::reconcile`] carries the previous column
//! index and row onto the new board, constrained to its bounds.

use ghkanban_core::SelectionState;

use crate::board::Board;
use crate::card::Card;

/// Neighbouring index on a ring of `len` columns.
pub(crate) fn wrap_index(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub column: usize,
    pub row: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// No board is installed.
    #[default]
    Unfocused,
    Focused(usize),
    /// A new board is being installed; holds the position to carry over.
    Reconciling(Option<Position>),
}

#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focus: Focus,
    cursors: Vec<SelectionState>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focused_column(&self) -> Option<usize> {
        match self.focus {
            Focus::Focused(index) => Some(index),
            _ => None,
        }
    }

    pub fn cursor(&self, column: usize) -> Option<SelectionState> {
        self.cursors.get(column).copied()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.focused_column()
            .and_then(|column| self.cursor(column))
            .and_then(|cursor| cursor.get())
    }

    pub fn position(&self) -> Option<Position> {
        self.focused_column().map(|column| Position {
            column,
            row: self.selected_row(),
        })
    }

    pub fn selected_card<'a>(&self, board: &'a Board) -> Option<&'a Card> {
        let position = self.position()?;
        board.column(position.column)?.card(position.row?)
    }

    /// Focus column `index` if it exists on `board`.
    pub fn set_focus(&mut self, index: usize, board: &Board) -> bool {
        if index >= board.column_count() || self.focused_column().is_none() {
            return false;
        }
        self.focus = Focus::Focused(index);
        true
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        let n = board.column_count();
        match self.focused_column() {
            Some(index) if n > 1 => {
                self.focus = Focus::Focused(wrap_index(index, n, false));
                true
            }
            _ => false,
        }
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        let n = board.column_count();
        match self.focused_column() {
            Some(index) if n > 1 => {
                self.focus = Focus::Focused(wrap_index(index, n, true));
                true
            }
            _ => false,
        }
    }

    pub fn select_next_card(&mut self, board: &Board) -> bool {
        self.with_focused_cursor(board, |cursor, len| cursor.next(len))
    }

    pub fn select_prev_card(&mut self, board: &Board) -> bool {
        self.with_focused_cursor(board, |cursor, len| cursor.prev(len))
    }

    fn with_focused_cursor(
        &mut self,
        board: &Board,
        step: impl FnOnce(&mut SelectionState, usize) -> bool,
    ) -> bool {
        let Some(index) = self.focused_column() else {
            return false;
        };
        let Some(len) = board.column(index).map(|c| c.card_count()) else {
            return false;
        };
        match self.cursors.get_mut(index) {
            Some(cursor) => step(cursor, len),
            None => false,
        }
    }

    /// Drop focus entirely, e.g. when the board was replaced by an error.
    pub fn clear(&mut self) {
        self.focus = Focus::Unfocused;
        self.cursors.clear();
    }

    /// Remember the current position ahead of a board replacement.
    pub fn begin_reconcile(&mut self) {
        if !matches!(self.focus, Focus::Reconciling(_)) {
            self.focus = Focus::Reconciling(self.position());
        }
    }

    /// Re-apply the remembered position to `board`.
    ///
    /// The column index is kept when still in range, otherwise clamped to the
    /// last column; an empty board leaves focus `Unfocused`. The row is kept
    /// only when the cell it points at exists and shows text, otherwise the
    /// cursor goes back to the first row. Every other column starts on its
    /// first row.
    pub fn finish_reconcile(&mut self, board: &Board) {
        let previous = match self.focus {
            Focus::Reconciling(previous) => previous,
            Focus::Focused(_) => self.position(),
            Focus::Unfocused => None,
        };

        self.cursors = board
            .columns
            .iter()
            .map(|column| SelectionState::first_of(column.card_count()))
            .collect();

        let n = board.column_count();
        if n == 0 {
            self.focus = Focus::Unfocused;
            return;
        }

        let Some(previous) = previous else {
            self.focus = Focus::Focused(0);
            return;
        };

        let column = previous.column.min(n - 1);
        self.focus = Focus::Focused(column);

        if let Some(row) = previous.row {
            if board.columns[column].has_text_at(row) {
                self.cursors[column].set(Some(row));
            }
        }
    }

    pub fn reconcile(&mut self, board: &Board) {
        self.begin_reconcile();
        self.finish_reconcile(board);
    }
}
