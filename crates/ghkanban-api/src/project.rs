//! GraphQL fetch of a repository's project board.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use ghkanban_domain::{Assignee, Label, ProjectTree, RawCard, RawColumn};

use crate::client::GithubClient;
use crate::error::{ApiError, ApiResult};
use crate::traits::{ProjectQuery, ProjectSource};

const CONTENT_FIELDS: &str = r#"
    title
    number
    url
    body
    labels(first: 10) { edges { node { name } } }
    assignees(first: 10) { edges { node { login name url id avatarUrl(size: 10) } } }
"#;

fn project_query() -> String {
    format!(
        r#"
query ($owner: String!, $name: String!, $searchString: String!) {{
  repository(owner: $owner, name: $name) {{
    projects(first: 1, search: $searchString) {{
      edges {{
        node {{
          name
          url
          columns(first: 10) {{
            edges {{
              node {{
                id
                name
                cards(first: 100) {{
                  edges {{
                    node {{
                      id
                      note
                      isArchived
                      content {{
                        ... on Issue {{ {fields} }}
                        ... on PullRequest {{ {fields} }}
                      }}
                    }}
                  }}
                }}
              }}
            }}
          }}
        }}
      }}
    }}
  }}
}}
"#,
        fields = CONTENT_FIELDS
    )
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Connection<T> {
    #[serde(default)]
    edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
struct Response {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    projects: Connection<ProjectNode>,
}

#[derive(Debug, Deserialize)]
struct ProjectNode {
    name: String,
    url: String,
    columns: Connection<ColumnNode>,
}

#[derive(Debug, Deserialize)]
struct ColumnNode {
    id: String,
    name: String,
    cards: Connection<CardNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardNode {
    id: String,
    note: Option<String>,
    #[serde(default)]
    is_archived: bool,
    content: Option<ContentNode>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentNode {
    #[serde(default)]
    title: String,
    number: Option<u64>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    labels: Connection<LabelNode>,
    #[serde(default)]
    assignees: Connection<AssigneeNode>,
}

#[derive(Debug, Deserialize)]
struct LabelNode {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssigneeNode {
    login: String,
    name: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    avatar_url: String,
}

impl From<CardNode> for RawCard {
    fn from(node: CardNode) -> Self {
        let content = node.content.unwrap_or_default();
        RawCard {
            node_id: node.id,
            number: content.number,
            title: content.title,
            body: content.body,
            url: content.url,
            note: node.note.unwrap_or_default(),
            is_archived: node.is_archived,
            labels: content
                .labels
                .into_nodes()
                .map(|label| Label { name: label.name })
                .collect(),
            assignees: content
                .assignees
                .into_nodes()
                .map(|a| Assignee {
                    login: a.login,
                    name: a.name.unwrap_or_default(),
                    avatar_url: a.avatar_url,
                    url: a.url,
                    id: a.id,
                })
                .collect(),
        }
    }
}

impl From<ColumnNode> for RawColumn {
    fn from(node: ColumnNode) -> Self {
        RawColumn {
            node_id: node.id,
            name: node.name,
            cards: node.cards.into_nodes().map(RawCard::from).collect(),
        }
    }
}

#[async_trait]
impl ProjectSource for GithubClient {
    async fn fetch_project(&self, query: &ProjectQuery) -> ApiResult<ProjectTree> {
        tracing::info!(
            "Fetching project {:?} of {}",
            query.search,
            query.slug()
        );
        let variables = json!({
            "owner": query.owner,
            "name": query.name,
            "searchString": query.search,
        });
        let response: Response = self.graphql(&project_query(), variables).await?;

        let not_found = || ApiError::ProjectNotFound {
            repository: query.slug(),
            search: query.search.clone(),
        };
        let project = response
            .repository
            .ok_or_else(not_found)?
            .projects
            .into_nodes()
            .next()
            .ok_or_else(not_found)?;

        let tree = ProjectTree {
            name: project.name,
            url: project.url,
            columns: project.columns.into_nodes().map(RawColumn::from).collect(),
        };
        tracing::debug!("Fetched {} column(s)", tree.columns.len());
        Ok(tree)
    }
}
