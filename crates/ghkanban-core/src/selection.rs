//! Row cursor shared by the board engine and the rendering adapter.
//!
//! The engine writes the cursor when focus moves or a board is reconciled;
//! the renderer reads it to highlight the selected row.

/// Cursor over the rows of a single list. `None` means the list has no
/// selectable row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Cursor on the first row, or empty when the list has no rows.
    pub fn first_of(len: usize) -> Self {
        let mut state = Self::new();
        state.reset(len);
        state
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Move down one row, stopping at the last row. Returns whether the
    /// cursor moved.
    pub fn next(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let target = match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        };
        let moved = self.selected != Some(target);
        self.selected = Some(target);
        moved
    }

    /// Move up one row, stopping at the first row. Returns whether the
    /// cursor moved.
    pub fn prev(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let target = match self.selected {
            Some(idx) => idx.min(len - 1).saturating_sub(1),
            None => 0,
        };
        let moved = self.selected != Some(target);
        self.selected = Some(target);
        moved
    }

    /// Put the cursor on the first row, or clear it for an empty list.
    pub fn reset(&mut self, len: usize) {
        self.selected = if len == 0 { None } else { Some(0) };
    }

    /// Keep the cursor inside `0..len` after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if len == 0 {
                self.selected = None;
            } else if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of() {
        assert_eq!(SelectionState::first_of(3).get(), Some(0));
        assert_eq!(SelectionState::first_of(0).get(), None);
    }

    #[test]
    fn test_next_stops_at_last_row() {
        let mut cursor = SelectionState::first_of(2);
        assert!(cursor.next(2));
        assert_eq!(cursor.get(), Some(1));
        assert!(!cursor.next(2));
        assert_eq!(cursor.get(), Some(1));
    }

    #[test]
    fn test_prev_stops_at_first_row() {
        let mut cursor = SelectionState::new();
        cursor.set(Some(1));
        assert!(cursor.prev(3));
        assert_eq!(cursor.get(), Some(0));
        assert!(!cursor.prev(3));
        assert_eq!(cursor.get(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut cursor = SelectionState::new();
        assert!(!cursor.next(0));
        assert!(!cursor.prev(0));
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn test_prev_recovers_from_out_of_range_cursor() {
        let mut cursor = SelectionState::new();
        cursor.set(Some(9));
        cursor.prev(3);
        assert_eq!(cursor.get(), Some(1));
    }

    #[test]
    fn test_clamp() {
        let mut cursor = SelectionState::new();
        cursor.set(Some(10));
        cursor.clamp(5);
        assert_eq!(cursor.get(), Some(4));

        cursor.clamp(0);
        assert_eq!(cursor.get(), None);

        cursor.set(Some(3));
        cursor.clamp(10);
        assert_eq!(cursor.get(), Some(3));
    }
}
