pub mod client;
pub mod error;
pub mod moves;
pub mod project;
pub mod traits;

pub use client::GithubClient;
pub use error::{ApiError, ApiResult};
pub use traits::{CardMover, ProjectQuery, ProjectSource};
