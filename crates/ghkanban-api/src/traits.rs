use async_trait::async_trait;
use ghkanban_core::RepositoryIdentity;
use ghkanban_domain::{CardPosition, ProjectTree};

use crate::error::ApiResult;

/// Which project to fetch: the first project of `owner/name` matching
/// `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub owner: String,
    pub name: String,
    pub search: String,
}

impl ProjectQuery {
    pub fn new(repository: &impl RepositoryIdentity, search: impl Into<String>) -> Self {
        Self {
            owner: repository.owner().to_string(),
            name: repository.name().to_string(),
            search: search.into(),
        }
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Source of project trees.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn fetch_project(&self, query: &ProjectQuery) -> ApiResult<ProjectTree>;
}

/// Remote card mutation.
#[async_trait]
pub trait CardMover: Send + Sync {
    async fn move_card(
        &self,
        card_id: u64,
        column_id: u64,
        position: CardPosition,
    ) -> ApiResult<()>;
}
