//! GitHub source implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use crate::http::HttpClient;

use super::{ReleaseAsset, RepoId, Source, SourceRelease};

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: Option<String>,
        pub name: Option<String>,
        pub html_url: Option<String>,
        pub published_at: Option<String>,
        pub created_at: Option<String>,
        pub assets: Option<Vec<Asset>>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: Option<String>,
        pub size: Option<u64>,
        pub browser_download_url: Option<String>,
    }
}

/// GitHub source implementation.
pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubSource {
    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches the first page of releases. Only one request is made.
    ///
    /// The body must be a JSON array; entries that do not decode as a
    /// release are skipped.
    async fn fetch_releases(&self, repo: &RepoId) -> Result<Vec<api::Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        debug!("Fetching releases from {}...", url);
        let entries: Vec<Value> = self.http_client.get_json(&url).await?;
        Ok(decode_releases(entries))
    }
}

fn decode_releases(entries: Vec<Value>) -> Vec<api::Release> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(release) => Some(release),
            Err(e) => {
                warn!("Skipping release entry #{}: {}", index, e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl Source for GitHubSource {
    #[tracing::instrument(skip(self))]
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<SourceRelease>> {
        let releases = self.fetch_releases(repo).await?;
        debug!("GitHub returned {} releases for {}", releases.len(), repo);
        Ok(releases.into_iter().map(|r| r.into()).collect())
    }
}

impl From<api::Release> for SourceRelease {
    fn from(r: api::Release) -> Self {
        SourceRelease {
            tag: r.tag_name,
            name: r.name,
            notes_url: r.html_url,
            published_at: r.published_at,
            created_at: r.created_at,
            assets: r
                .assets
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.into())
                .collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name.unwrap_or_default(),
            size: a.size.unwrap_or_default(),
            download_url: a.browser_download_url.unwrap_or_default(),
        }
    }
}
