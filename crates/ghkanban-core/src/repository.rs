//! Resolves which GitHub repository the board belongs to.
//!
//! The repository comes either from an explicit `OWNER/REPO` argument or
//! from the local git remotes, preferring `upstream`, then `github`, then
//! `origin`, then any other remote in alphabetical order.

use regex::Regex;
use std::cmp::Reverse;
use std::process::Command;
use std::sync::LazyLock;

use crate::error::BoardError;
use crate::result::BoardResult;

static REMOTE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+(\S+)\s+\((fetch|push)\)").expect("remote line pattern is valid")
});

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_+-]+://").expect("scheme pattern is valid"));

/// Anything that can name a repository on the remote service.
pub trait RepositoryIdentity {
    fn owner(&self) -> &str;
    fn name(&self) -> &str;

    fn slug(&self) -> String {
        format!("{}/{}", self.owner(), self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `OWNER/REPO` string.
    pub fn from_slug(slug: &str) -> BoardResult<Self> {
        let parts: Vec<&str> = slug.trim().split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(*owner, *name))
            }
            _ => Err(BoardError::InvalidRepoSlug(slug.to_string())),
        }
    }

    /// Resolve the repository from `git remote -v` in the current directory.
    pub fn from_git_remotes() -> BoardResult<Self> {
        let output = Command::new("git").args(["remote", "-v"]).output()?;
        if !output.status.success() {
            return Err(BoardError::Command {
                command: "git remote -v".to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let remotes = parse_git_remotes(&String::from_utf8_lossy(&output.stdout));
        let repository = select_base_repository(&remotes)?;
        tracing::info!("Resolved repository {} from git remotes", repository.slug());
        Ok(repository)
    }
}

impl RepositoryIdentity for Repository {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One named remote from `git remote -v`. URLs are normalized so that scp-like
/// addresses (`git@host:owner/repo.git`) become `ssh://git@host/owner/repo.git`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub fetch_url: Option<String>,
    pub push_url: Option<String>,
}

impl Remote {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fetch_url: None,
            push_url: None,
        }
    }

    /// Owner and repository named by this remote. The push URL wins when both
    /// are present.
    pub fn repository(&self) -> BoardResult<Repository> {
        let url = self
            .push_url
            .as_deref()
            .or(self.fetch_url.as_deref())
            .ok_or_else(|| BoardError::Repository(format!("remote {} has no url", self.name)))?;

        let path = url_path(url);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [owner, name] => Ok(Repository::new(*owner, name.trim_end_matches(".git"))),
            _ => Err(BoardError::Repository(format!("invalid remote url: {}", url))),
        }
    }

    fn priority(&self) -> u8 {
        match self.name.to_lowercase().as_str() {
            "upstream" => 3,
            "github" => 2,
            "origin" => 1,
            _ => 0,
        }
    }
}

/// Parse the output of `git remote -v`. Lines that do not look like remotes
/// are skipped.
pub fn parse_git_remotes(output: &str) -> Vec<Remote> {
    let mut remotes: Vec<Remote> = Vec::new();

    for line in output.lines() {
        let Some(caps) = REMOTE_LINE_RE.captures(line.trim()) else {
            continue;
        };
        let name = &caps[1];
        let url = normalize_remote_url(&caps[2]);

        let index = match remotes.iter().position(|r| r.name == name) {
            Some(index) => index,
            None => {
                remotes.push(Remote::new(name));
                remotes.len() - 1
            }
        };

        match &caps[3] {
            "push" => remotes[index].push_url = Some(url),
            _ => remotes[index].fetch_url = Some(url),
        }
    }

    remotes
}

/// Pick the highest priority remote and turn it into a repository.
pub fn select_base_repository(remotes: &[Remote]) -> BoardResult<Repository> {
    let mut ordered: Vec<&Remote> = remotes.iter().collect();
    ordered.sort_by_key(|r| (Reverse(r.priority()), r.name.clone()));

    ordered
        .first()
        .ok_or_else(|| BoardError::Repository("no git remotes found".to_string()))?
        .repository()
}

fn normalize_remote_url(url: &str) -> String {
    if SCHEME_RE.is_match(url) {
        url.to_string()
    } else {
        format!("ssh://{}", url.replacen(':', "/", 1))
    }
}

fn url_path(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split_once('/')
        .map_or("", |(_, path)| path)
}
