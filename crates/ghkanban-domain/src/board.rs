use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::tree::ProjectTree;

/// A fetched project board. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub project_url: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Build a board from a fetched tree. Columns map 1:1 in fetch order.
    pub fn from_tree(tree: ProjectTree) -> Self {
        let columns: Vec<Column> = tree.columns.into_iter().map(Column::from_raw).collect();
        tracing::debug!(
            "Built board {:?} with {} column(s)",
            tree.name,
            columns.len()
        );
        Self {
            name: tree.name,
            project_url: tree.url,
            columns,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
