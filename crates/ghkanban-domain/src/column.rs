use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::node_id::{NodeKind, RemoteId};
use crate::tree::RawColumn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: RemoteId,
    pub name: String,
    pub cards: Vec<Card>,
}

impl Column {
    /// Build a column from fetched data. Archived cards are dropped; the rest
    /// keep fetch order.
    pub fn from_raw(raw: RawColumn) -> Self {
        let id = RemoteId::decode(&raw.node_id, NodeKind::ProjectColumn);
        let total = raw.cards.len();
        let cards: Vec<Card> = raw
            .cards
            .into_iter()
            .filter(|card| !card.is_archived)
            .map(Card::from_raw)
            .collect();

        if cards.len() < total {
            tracing::debug!(
                "Column {}: hid {} archived card(s)",
                raw.name,
                total - cards.len()
            );
        }

        Self {
            id,
            name: raw.name,
            cards,
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn card(&self, row: usize) -> Option<&Card> {
        self.cards.get(row)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the row exists and renders some text.
    pub fn has_text_at(&self, row: usize) -> bool {
        self.card(row)
            .map(|card| !card.display_text().is_empty())
            .unwrap_or(false)
    }
}
