//! HTTP plumbing shared by the GraphQL fetch and the REST move.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use ghkanban_core::config::{DEFAULT_GRAPHQL_URL, DEFAULT_REST_URL};

use crate::error::{ApiError, ApiResult};

/// Preview media type that exposes classic project boards.
pub const PROJECTS_PREVIEW_ACCEPT: &str = "application/vnd.github.inertia-preview+json";
const GRAPHQL_PREVIEW_ACCEPT: &str = "application/vnd.github.antiope-preview+json";
const USER_AGENT: &str = concat!("ghkanban/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    token: String,
    graphql_url: String,
    rest_url: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> ApiResult<Self> {
        Self::with_endpoints(token, DEFAULT_GRAPHQL_URL, DEFAULT_REST_URL)
    }

    /// Client for a GitHub Enterprise instance or a test server.
    pub fn with_endpoints(
        token: impl Into<String>,
        graphql_url: &str,
        rest_url: &str,
    ) -> ApiResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            token: token.into(),
            graphql_url: graphql_url.to_string(),
            rest_url: rest_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    pub(crate) fn rest_url(&self, path: &str) -> String {
        format!("{}{}", self.rest_url, path)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", format!("token {}", self.token))
    }

    /// Run a GraphQL query and decode its `data` member.
    pub async fn graphql<V, T>(&self, query: &str, variables: V) -> ApiResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let builder = self
            .client
            .post(&self.graphql_url)
            .header("Accept", GRAPHQL_PREVIEW_ACCEPT)
            .json(&GraphQlRequest { query, variables });
        let resp = self.with_auth(builder).send().await?;
        let body = checked_body(resp).await?;

        let parsed: GraphQlResponse<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if !parsed.errors.is_empty() {
            return Err(ApiError::GraphQl(
                parsed.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        parsed
            .data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }

    /// POST a JSON body to a REST path, discarding the response body.
    pub async fn rest_post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let builder = self
            .client
            .post(self.rest_url(path))
            .header("Accept", PROJECTS_PREVIEW_ACCEPT)
            .json(body);
        let resp = self.with_auth(builder).send().await?;
        checked_body(resp).await.map(|_| ())
    }
}

/// Read the body of a successful response, or turn a non-2xx into
/// [`ApiError::Http`] carrying the service's `message` when present.
async fn checked_body(resp: Response) -> ApiResult<String> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await?;
    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["message"].as_str().map(String::from))
        .unwrap_or(body);
    Err(ApiError::Http {
        url,
        status: status.as_u16(),
        message,
    })
}
