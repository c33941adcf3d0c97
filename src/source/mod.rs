//! Source abstraction for release listings.
//!
//! The appcast pipeline only depends on the [`Source`] trait; the GitHub
//! implementation lives in [`github`].

mod github;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

pub use github::{DEFAULT_API_URL, GitHubSource};

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A downloadable asset from a release.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseAsset {
    /// File name, only used for extension matching
    pub name: String,
    pub size: u64,
    pub download_url: String,
}

/// A release from the source.
///
/// Every field is optional on the wire; a release missing any of them is
/// still listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRelease {
    /// Version tag (e.g., "v1.0.0")
    pub tag: Option<String>,
    /// Release name/title
    pub name: Option<String>,
    /// Web page with the release notes
    pub notes_url: Option<String>,
    /// Publication date (ISO 8601)
    pub published_at: Option<String>,
    /// Creation date (ISO 8601), used when the release has no publication date
    pub created_at: Option<String>,
    /// Downloadable assets
    pub assets: Vec<ReleaseAsset>,
}

impl SourceRelease {
    /// The publication timestamp, falling back to the creation timestamp.
    pub fn timestamp(&self) -> Option<&str> {
        non_empty(&self.published_at).or_else(|| non_empty(&self.created_at))
    }

    /// The display title, falling back to the tag.
    pub fn title(&self) -> &str {
        non_empty(&self.name)
            .or(self.tag.as_deref())
            .unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Trait for release sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Source: Send + Sync {
    /// Fetch the releases of a repository, newest first, as listed by the source.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<SourceRelease>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parse() {
        let repo: RepoId = "owner/repo".parse().unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repo, "repo");
    }

    #[test]
    fn test_repo_id_display() {
        let repo = RepoId {
            owner: "owner".into(),
            repo: "repo".into(),
        };
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_repo_id_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
        assert!("owner/repo/extra".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_timestamp_prefers_published_at() {
        let release = SourceRelease {
            published_at: Some("2024-02-05T12:34:56Z".into()),
            created_at: Some("2024-02-01T00:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(release.timestamp(), Some("2024-02-05T12:34:56Z"));
    }

    #[test]
    fn test_timestamp_falls_back_to_created_at() {
        let release = SourceRelease {
            published_at: None,
            created_at: Some("2024-02-01T00:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(release.timestamp(), Some("2024-02-01T00:00:00Z"));

        let draft = SourceRelease {
            published_at: Some(String::new()),
            created_at: Some("2024-02-01T00:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(draft.timestamp(), Some("2024-02-01T00:00:00Z"));
    }

    #[test]
    fn test_timestamp_absent() {
        assert_eq!(SourceRelease::default().timestamp(), None);
    }

    #[test]
    fn test_title_falls_back_to_tag() {
        let named = SourceRelease {
            tag: Some("v1.0.0".into()),
            name: Some("First release".into()),
            ..Default::default()
        };
        assert_eq!(named.title(), "First release");

        let unnamed = SourceRelease {
            tag: Some("v1.0.0".into()),
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(unnamed.title(), "v1.0.0");

        assert_eq!(SourceRelease::default().title(), "");
    }
}
