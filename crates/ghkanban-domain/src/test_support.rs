//! Builders for fetched trees used across the crate's unit tests.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::board::Board;
use crate::tree::{ProjectTree, RawCard, RawColumn};

pub fn column_node_id(id: u64) -> String {
    B64.encode(format!("04:ProjectColumn{id}"))
}

pub fn card_node_id(id: u64) -> String {
    B64.encode(format!("011:ProjectCard{id}"))
}

pub fn raw_card(id: u64, title: &str) -> RawCard {
    RawCard {
        node_id: card_node_id(id),
        title: title.to_string(),
        url: format!("https://github.com/o/r/issues/{id}"),
        number: Some(id),
        ..Default::default()
    }
}

/// Column `id` whose cards get ids `id * 100 + row`.
pub fn raw_column(id: u64, name: &str, titles: &[&str]) -> RawColumn {
    RawColumn {
        node_id: column_node_id(id),
        name: name.to_string(),
        cards: titles
            .iter()
            .enumerate()
            .map(|(row, title)| raw_card(id * 100 + row as u64, title))
            .collect(),
    }
}

/// Tree with columns numbered from 1 in the given order.
pub fn tree(columns: &[(&str, &[&str])]) -> ProjectTree {
    ProjectTree {
        name: "Board".to_string(),
        url: "https://github.com/o/r/projects/1".to_string(),
        columns: columns
            .iter()
            .enumerate()
            .map(|(i, (name, titles))| raw_column(i as u64 + 1, name, titles))
            .collect(),
    }
}

pub fn board(columns: &[(&str, &[&str])]) -> Board {
    Board::from_tree(tree(columns))
}
