use serde::{Deserialize, Serialize};

use crate::node_id::{NodeKind, RemoteId};
use crate::tree::{Assignee, RawCard};

pub const NOTE_MARKER: &str = "📝";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: RemoteId,
    pub number: Option<u64>,
    pub title: String,
    pub body: String,
    pub url: String,
    pub note: String,
    pub labels: Vec<String>,
    pub assignees: Vec<Assignee>,
}

impl Card {
    pub fn from_raw(raw: RawCard) -> Self {
        Self {
            id: RemoteId::decode(&raw.node_id, NodeKind::ProjectCard),
            number: raw.number,
            title: raw.title,
            body: raw.body,
            url: raw.url,
            note: raw.note,
            labels: raw.labels.into_iter().map(|l| l.name).collect(),
            assignees: raw.assignees,
        }
    }

    /// Text shown in the card's row: the title, else the note behind a memo
    /// marker, else nothing.
    pub fn display_text(&self) -> String {
        if !self.title.is_empty() {
            self.title.clone()
        } else if !self.note.is_empty() {
            format!("{}{}", NOTE_MARKER, self.note)
        } else {
            String::new()
        }
    }

    pub fn is_note(&self) -> bool {
        self.title.is_empty()
    }

    /// Markdown source for the detail pane.
    pub fn detail_markdown(&self) -> String {
        if self.is_note() {
            return self.note.clone();
        }
        format!("{}\n{}\n\n{}", self.title, self.url, self.body)
    }
}
