pub mod config;
pub mod error;
pub mod repository;
pub mod result;
pub mod selection;

pub use config::{AppConfig, RefreshPolicy};
pub use error::BoardError;
pub use repository::{Remote, Repository, RepositoryIdentity};
pub use result::BoardResult;
pub use selection::SelectionState;
