use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::BoardError;
use crate::result::BoardResult;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_REST_URL: &str = "https://api.github.com";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// How the dispatcher treats fetch results that complete out of request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Results are applied in completion order, so a slow stale fetch can
    /// overwrite a newer one.
    LastDelivered,
    /// Results older than the last applied one are dropped.
    #[default]
    DropStale,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub oauth_token: Option<String>,
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,
    #[serde(default)]
    pub graphql_url: Option<String>,
    #[serde(default)]
    pub rest_url: Option<String>,
    #[serde(default)]
    pub detail_scroll_step: Option<u16>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/ghkanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("ghkanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("ghkanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the config from the platform default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> BoardResult<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> BoardResult<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| BoardError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the GitHub token. The environment value wins over the file.
    pub fn auth_token(&self, env_token: Option<String>) -> BoardResult<String> {
        env_token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.oauth_token.clone().filter(|t| !t.trim().is_empty()))
            .ok_or_else(|| {
                BoardError::Config(format!(
                    "no GitHub token found; set {} or oauth_token in {}",
                    TOKEN_ENV_VAR,
                    Self::config_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "config.toml".to_string())
                ))
            })
    }

    pub fn effective_graphql_url(&self) -> &str {
        self.graphql_url.as_deref().unwrap_or(DEFAULT_GRAPHQL_URL)
    }

    pub fn effective_rest_url(&self) -> &str {
        self.rest_url.as_deref().unwrap_or(DEFAULT_REST_URL)
    }

    pub fn effective_detail_scroll_step(&self) -> u16 {
        self.detail_scroll_step.unwrap_or(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.oauth_token.is_none());
        assert_eq!(config.refresh_policy, RefreshPolicy::DropStale);
        assert_eq!(config.effective_graphql_url(), DEFAULT_GRAPHQL_URL);
        assert_eq!(config.effective_rest_url(), DEFAULT_REST_URL);
        assert_eq!(config.effective_detail_scroll_step(), 2);
    }

    #[test]
    fn test_parses_all_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
oauth_token = "abc123"
refresh_policy = "last-delivered"
graphql_url = "https://ghe.example.com/api/graphql"
rest_url = "https://ghe.example.com/api/v3"
detail_scroll_step = 5
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.oauth_token.as_deref(), Some("abc123"));
        assert_eq!(config.refresh_policy, RefreshPolicy::LastDelivered);
        assert_eq!(
            config.effective_graphql_url(),
            "https://ghe.example.com/api/graphql"
        );
        assert_eq!(config.effective_rest_url(), "https://ghe.example.com/api/v3");
        assert_eq!(config.effective_detail_scroll_step(), 5);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "refresh_policy = \"sometimes\"").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_env_token_wins_over_file() {
        let config = AppConfig {
            oauth_token: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.auth_token(Some("from-env".to_string())).unwrap(),
            "from-env"
        );
        assert_eq!(config.auth_token(None).unwrap(), "from-file");
        assert_eq!(config.auth_token(Some("  ".to_string())).unwrap(), "from-file");
    }

    #[test]
    fn test_missing_token_is_error() {
        let config = AppConfig::default();
        assert!(matches!(
            config.auth_token(None),
            Err(BoardError::Config(_))
        ));
    }

    #[test]
    fn test_scroll_step_never_zero() {
        let config = AppConfig {
            detail_scroll_step: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_detail_scroll_step(), 1);
    }
}
