//! Refresh protocol: sequence numbers for fetches and the rule deciding
//! which deliveries get applied.

use ghkanban_core::RefreshPolicy;

use crate::board::Board;

/// What the board area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardView {
    /// Nothing has been delivered yet.
    #[default]
    Loading,
    Ready(Board),
    /// The last applied fetch failed; the previous board is gone.
    Failed(String),
}

impl BoardView {
    pub fn board(&self) -> Option<&Board> {
        match self {
            BoardView::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BoardView::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Apply,
    /// An equal or newer fetch has already been applied.
    Stale { latest: u64 },
}

#[derive(Debug, Clone)]
pub struct RefreshTracker {
    policy: RefreshPolicy,
    next: u64,
    last_applied: Option<u64>,
    in_flight: usize,
}

impl RefreshTracker {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            next: 0,
            last_applied: None,
            in_flight: 0,
        }
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Allocate the sequence number for a new fetch.
    pub fn issue(&mut self) -> u64 {
        let seq = self.next;
        self.next += 1;
        self.in_flight += 1;
        seq
    }

    /// Decide whether the delivery for `seq` should replace the board.
    pub fn admit(&mut self, seq: u64) -> Admission {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == RefreshPolicy::DropStale {
            if let Some(latest) = self.last_applied.filter(|latest| *latest >= seq) {
                return Admission::Stale { latest };
            }
        }

        self.last_applied = Some(self.last_applied.map_or(seq, |latest| latest.max(seq)));
        Admission::Apply
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for RefreshTracker {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_increase() {
        let mut tracker = RefreshTracker::default();
        assert_eq!(tracker.issue(), 0);
        assert_eq!(tracker.issue(), 1);
        assert_eq!(tracker.in_flight(), 2);
    }

    #[test]
    fn test_drop_stale_ignores_older_delivery() {
        let mut tracker = RefreshTracker::new(RefreshPolicy::DropStale);
        let first = tracker.issue();
        let second = tracker.issue();

        assert_eq!(tracker.admit(second), Admission::Apply);
        assert_eq!(tracker.admit(first), Admission::Stale { latest: second });
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_drop_stale_applies_in_order_deliveries() {
        let mut tracker = RefreshTracker::new(RefreshPolicy::DropStale);
        let first = tracker.issue();
        let second = tracker.issue();
        assert_eq!(tracker.admit(first), Admission::Apply);
        assert_eq!(tracker.admit(second), Admission::Apply);
    }

    #[test]
    fn test_last_delivered_applies_everything() {
        let mut tracker = RefreshTracker::new(RefreshPolicy::LastDelivered);
        let first = tracker.issue();
        let second = tracker.issue();
        assert_eq!(tracker.admit(second), Admission::Apply);
        assert_eq!(tracker.admit(first), Admission::Apply);
    }

    #[test]
    fn test_board_view_accessors() {
        assert!(BoardView::Loading.board().is_none());
        assert_eq!(BoardView::Failed("boom".into()).error(), Some("boom"));
        assert!(BoardView::Ready(Board::default()).board().is_some());
    }
}
