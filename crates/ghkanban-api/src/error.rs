use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("http error, '{url}' failed ({status}): '{message}'")]
    Http {
        url: String,
        status: u16,
        message: String,
    },

    #[error("graphql error: '{}'", .0.join(", "))]
    GraphQl(Vec<String>),

    #[error("unexpected response payload: {0}")]
    Decode(String),

    #[error("no project matching {search:?} in {repository}")]
    ProjectNotFound { repository: String, search: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
