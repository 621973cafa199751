//! The board context owned by the UI controller.
//!
//! Everything that reads or mutates the board, focus, refresh bookkeeping
//! or move markers goes through [`BoardState`], so bounds and wrap-around
//! rules are enforced in one place.

use std::fmt::Display;

use chrono::{DateTime, Local};
use ghkanban_core::RefreshPolicy;

use crate::board::Board;
use crate::card::Card;
use crate::column::Column;
use crate::focus::{Focus, FocusState};
use crate::moves::{
    plan_move, MoveDirection, MoveMarker, MoveRejected, MoveRequest, MoveResult, MoveTracker,
};
use crate::refresh::{Admission, BoardView, RefreshTracker};
use crate::tree::ProjectTree;

/// What happened to a fetch delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Installed,
    Failed,
    /// A newer fetch was already applied; nothing changed.
    Dropped,
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    view: BoardView,
    focus: FocusState,
    refresh: RefreshTracker,
    moves: MoveTracker,
    last_updated: Option<DateTime<Local>>,
}

impl BoardState {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            refresh: RefreshTracker::new(policy),
            ..Default::default()
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn board(&self) -> Option<&Board> {
        self.view.board()
    }

    pub fn focus(&self) -> Focus {
        self.focus.focus()
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    pub fn focused_column(&self) -> Option<usize> {
        self.focus.focused_column()
    }

    pub fn focused_column_ref(&self) -> Option<&Column> {
        self.board()?.column(self.focused_column()?)
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.focus.selected_row()
    }

    /// Cursor row of an arbitrary column, for rendering.
    pub fn row_in(&self, column: usize) -> Option<usize> {
        self.focus.cursor(column).and_then(|cursor| cursor.get())
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.focus.selected_card(self.board()?)
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.refresh.policy()
    }

    pub fn is_loading(&self) -> bool {
        self.refresh.is_loading()
    }

    pub fn set_focus(&mut self, index: usize) -> bool {
        match self.view.board() {
            Some(board) => self.focus.set_focus(index, board),
            None => false,
        }
    }

    pub fn move_focus_left(&mut self) -> bool {
        match self.view.board() {
            Some(board) => self.focus.move_left(board),
            None => false,
        }
    }

    pub fn move_focus_right(&mut self) -> bool {
        match self.view.board() {
            Some(board) => self.focus.move_right(board),
            None => false,
        }
    }

    pub fn select_next_card(&mut self) -> bool {
        match self.view.board() {
            Some(board) => self.focus.select_next_card(board),
            None => false,
        }
    }

    pub fn select_prev_card(&mut self) -> bool {
        match self.view.board() {
            Some(board) => self.focus.select_prev_card(board),
            None => false,
        }
    }

    /// Start a fetch and return its sequence number.
    pub fn request_refresh(&mut self) -> u64 {
        let seq = self.refresh.issue();
        tracing::debug!("Issued refresh #{}", seq);
        seq
    }

    /// Apply a fetch result. Success replaces the board and reconciles focus;
    /// failure discards the board and clears focus.
    pub fn apply_fetch<E: Display>(
        &mut self,
        seq: u64,
        result: Result<ProjectTree, E>,
    ) -> DeliveryOutcome {
        if let Admission::Stale { latest } = self.refresh.admit(seq) {
            tracing::debug!("Dropped refresh #{} (already applied #{})", seq, latest);
            return DeliveryOutcome::Dropped;
        }

        self.last_updated = Some(Local::now());

        match result {
            Ok(tree) => {
                let board = Board::from_tree(tree);
                self.focus.begin_reconcile();
                self.focus.finish_reconcile(&board);
                self.moves.retain_visible(&board);
                tracing::info!(
                    "Installed board {:?} from refresh #{} ({} columns)",
                    board.name,
                    seq,
                    board.column_count()
                );
                self.view = BoardView::Ready(board);
                DeliveryOutcome::Installed
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!("Refresh #{} failed: {}", seq, message);
                self.focus.clear();
                self.view = BoardView::Failed(message);
                DeliveryOutcome::Failed
            }
        }
    }

    /// Plan a move of the focused card and mark it pending.
    pub fn start_move(&mut self, direction: MoveDirection) -> Result<MoveRequest, MoveRejected> {
        let board = self.view.board().ok_or(MoveRejected::NoBoard)?;
        let request = plan_move(board, &self.focus, direction)?;
        if self.moves.is_pending(request.card_id) {
            return Err(MoveRejected::AlreadyPending);
        }
        self.moves.mark_pending(request.card_id);
        tracing::debug!(
            "Moving card {} from column {} to column {}",
            request.card_id,
            request.source_column,
            request.destination_column
        );
        Ok(request)
    }

    pub fn apply_move_result(&mut self, result: &MoveResult) {
        self.moves.resolve(result);
    }

    pub fn card_marker(&self, card: &Card) -> Option<MoveMarker> {
        card.id.get().and_then(|id| self.moves.marker(id))
    }

    pub fn pending_moves(&self) -> usize {
        self.moves.pending_count()
    }

    pub fn clear_failed_markers(&mut self) {
        self.moves.clear_failed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveOutcome;
    use crate::test_support::tree;

    fn installed(columns: &[(&str, &[&str])]) -> BoardState {
        let mut state = BoardState::new(RefreshPolicy::DropStale);
        let seq = state.request_refresh();
        let outcome = state.apply_fetch::<String>(seq, Ok(tree(columns)));
        assert_eq!(outcome, DeliveryOutcome::Installed);
        state
    }

    #[test]
    fn test_starts_loading_and_unfocused() {
        let state = BoardState::new(RefreshPolicy::default());
        assert_eq!(state.view(), &BoardView::Loading);
        assert_eq!(state.focus(), Focus::Unfocused);
        assert!(state.last_updated().is_none());
    }

    #[test]
    fn test_navigation_is_noop_before_first_board() {
        let mut state = BoardState::new(RefreshPolicy::default());
        assert!(!state.move_focus_left());
        assert!(!state.move_focus_right());
        assert!(!state.select_next_card());
        assert!(!state.set_focus(0));
        assert_eq!(
            state.start_move(MoveDirection::Forward),
            Err(MoveRejected::NoBoard)
        );
    }

    #[test]
    fn test_first_board_focuses_first_column() {
        let state = installed(&[("Todo", &["a"]), ("Done", &[])]);
        assert_eq!(state.focused_column(), Some(0));
        assert_eq!(state.selected_card().unwrap().title, "a");
        assert!(state.last_updated().is_some());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_focus_scenario_across_three_columns() {
        let mut state = installed(&[("Todo", &[]), ("Doing", &[]), ("Done", &[])]);
        assert!(state.set_focus(1));
        state.move_focus_left();
        assert_eq!(state.focused_column_ref().unwrap().name, "Todo");
        state.move_focus_right();
        assert_eq!(state.focused_column(), Some(1));
    }

    #[test]
    fn test_shrinking_board_reconciles_focus() {
        let mut state = installed(&[("Todo", &[]), ("Doing", &[]), ("Done", &[])]);
        state.set_focus(2);

        let seq = state.request_refresh();
        state.apply_fetch::<String>(seq, Ok(tree(&[("Todo", &[])])));
        assert_eq!(state.focused_column(), Some(0));
    }

    #[test]
    fn test_failed_fetch_discards_previous_board() {
        let mut state = installed(&[("Todo", &["a"])]);
        let seq = state.request_refresh();
        let outcome = state.apply_fetch(seq, Err::<ProjectTree, _>("network down"));

        assert_eq!(outcome, DeliveryOutcome::Failed);
        assert!(state.board().is_none());
        assert_eq!(state.view().error(), Some("network down"));
        assert_eq!(state.focus(), Focus::Unfocused);
        assert!(!state.move_focus_right());
    }

    #[test]
    fn test_success_after_failure_starts_at_column_zero() {
        let mut state = installed(&[("Todo", &[]), ("Done", &["x"])]);
        state.set_focus(1);
        let seq = state.request_refresh();
        state.apply_fetch(seq, Err::<ProjectTree, _>("boom"));

        let seq = state.request_refresh();
        state.apply_fetch::<String>(seq, Ok(tree(&[("Todo", &[]), ("Done", &["x"])])));
        assert_eq!(state.focused_column(), Some(0));
    }

    #[test]
    fn test_stale_delivery_is_dropped() {
        let mut state = BoardState::new(RefreshPolicy::DropStale);
        let old = state.request_refresh();
        let new = state.request_refresh();

        state.apply_fetch::<String>(new, Ok(tree(&[("Fresh", &[])])));
        let outcome = state.apply_fetch::<String>(old, Ok(tree(&[("Stale", &[])])));

        assert_eq!(outcome, DeliveryOutcome::Dropped);
        assert_eq!(state.board().unwrap().column_names(), vec!["Fresh"]);
    }

    #[test]
    fn test_last_delivered_policy_applies_late_result() {
        let mut state = BoardState::new(RefreshPolicy::LastDelivered);
        let old = state.request_refresh();
        let new = state.request_refresh();

        state.apply_fetch::<String>(new, Ok(tree(&[("Fresh", &[])])));
        state.apply_fetch::<String>(old, Ok(tree(&[("Stale", &[])])));
        assert_eq!(state.board().unwrap().column_names(), vec!["Stale"]);
    }

    #[test]
    fn test_move_marks_pending_until_result() {
        let mut state = installed(&[("Todo", &["a"]), ("Done", &[])]);
        let request = state.start_move(MoveDirection::Forward).unwrap();
        assert_eq!(request.destination_column_id, 2);

        let card = state.selected_card().unwrap().clone();
        assert_eq!(state.card_marker(&card), Some(MoveMarker::Pending));
        assert_eq!(
            state.start_move(MoveDirection::Forward),
            Err(MoveRejected::AlreadyPending)
        );

        state.apply_move_result(&MoveResult {
            card_id: request.card_id,
            outcome: MoveOutcome::Succeeded,
        });
        assert_eq!(state.card_marker(&card), None);
        assert_eq!(state.pending_moves(), 0);
    }

    #[test]
    fn test_failed_move_is_flagged_then_cleared() {
        let mut state = installed(&[("Todo", &["a"]), ("Done", &[])]);
        let request = state.start_move(MoveDirection::Backward).unwrap();
        state.apply_move_result(&MoveResult {
            card_id: request.card_id,
            outcome: MoveOutcome::Failed("422".to_string()),
        });

        let card = state.selected_card().unwrap().clone();
        assert_eq!(state.card_marker(&card), Some(MoveMarker::Failed));

        state.start_move(MoveDirection::Forward).unwrap();
        assert_eq!(state.card_marker(&card), Some(MoveMarker::Pending));

        state.apply_move_result(&MoveResult {
            card_id: request.card_id,
            outcome: MoveOutcome::Failed("422".to_string()),
        });
        state.clear_failed_markers();
        assert_eq!(state.card_marker(&card), None);
    }
}
