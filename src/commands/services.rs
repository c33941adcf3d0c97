//! Service factory for building the release source.

use anyhow::Result;

use crate::{http::build_http_client, source::GitHubSource};

use super::config::Config;

/// Build a GitHub source from configuration
pub fn build_source(config: &Config) -> Result<GitHubSource> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubSource::from_http_client(http_client, &config.api_url))
}
