//! Decoding of GitHub global node IDs.
//!
//! A node ID is standard base64 over a string such as `04:ProjectColumn123`.
//! The trailing digit run after the type tag is the entity's REST database id,
//! which the move endpoint needs.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*:)?ProjectColumn(\d+)$").expect("column id pattern is valid")
});

static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*:)?ProjectCard(\d+)$").expect("card id pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ProjectColumn,
    ProjectCard,
}

impl NodeKind {
    fn pattern(self) -> &'static Regex {
        match self {
            NodeKind::ProjectColumn => &*COLUMN_RE,
            NodeKind::ProjectCard => &*CARD_RE,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::ProjectColumn => write!(f, "ProjectColumn"),
            NodeKind::ProjectCard => write!(f, "ProjectCard"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    #[error("node id {node_id:?} is not valid base64: {reason}")]
    Decode { node_id: String, reason: String },

    #[error("node id decodes to {decoded:?}, expected a {kind}<digits> suffix")]
    PatternMismatch { kind: NodeKind, decoded: String },
}

/// Decode `node_id` and extract the numeric id for `kind`.
pub fn decode_node_id(node_id: &str, kind: NodeKind) -> Result<u64, NodeIdError> {
    let bytes = B64.decode(node_id.trim()).map_err(|e| NodeIdError::Decode {
        node_id: node_id.to_string(),
        reason: e.to_string(),
    })?;
    let decoded = String::from_utf8_lossy(&bytes).into_owned();

    let mismatch = || NodeIdError::PatternMismatch {
        kind,
        decoded: decoded.clone(),
    };

    let digits = kind
        .pattern()
        .captures(&decoded)
        .and_then(|caps| caps.get(1))
        .ok_or_else(mismatch)?;

    digits.as_str().parse::<u64>().map_err(|_| mismatch())
}

/// Numeric id of a column or card, or the sentinel for one that could not be
/// decoded. Unresolved entities are displayed but never used in mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteId {
    Resolved(u64),
    Unresolved,
}

impl RemoteId {
    /// Decode, logging and degrading to [`RemoteId::Unresolved`] on failure.
    pub fn decode(node_id: &str, kind: NodeKind) -> Self {
        match decode_node_id(node_id, kind) {
            Ok(id) => RemoteId::Resolved(id),
            Err(e) => {
                tracing::warn!("Unresolvable {} id: {}", kind, e);
                RemoteId::Unresolved
            }
        }
    }

    pub fn get(self) -> Option<u64> {
        match self {
            RemoteId::Resolved(id) => Some(id),
            RemoteId::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, RemoteId::Resolved(_))
    }
}
