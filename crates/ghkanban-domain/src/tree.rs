//! The project tree as delivered by the fetch transport, before any
//! filtering or id decoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTree {
    pub name: String,
    pub url: String,
    pub columns: Vec<RawColumn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumn {
    /// Opaque global node id.
    pub node_id: String,
    pub name: String,
    pub cards: Vec<RawCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    pub node_id: String,
    /// Issue or pull request number, when the card wraps one.
    pub number: Option<u64>,
    pub title: String,
    pub body: String,
    pub url: String,
    pub note: String,
    pub is_archived: bool,
    pub labels: Vec<Label>,
    pub assignees: Vec<Assignee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub login: String,
    pub name: String,
    pub avatar_url: String,
    pub url: String,
    pub id: String,
}
