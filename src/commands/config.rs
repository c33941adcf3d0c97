//! Configuration resolved from the process environment.

use anyhow::Result;
use log::debug;

use crate::{
    error::AppcastError,
    runtime::Runtime,
    source::{DEFAULT_API_URL, RepoId},
};

pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const SERVER_URL_VAR: &str = "GITHUB_SERVER_URL";

pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Configuration for one appcast run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Repository whose releases are listed
    pub repo: RepoId,
    /// Optional access token for private repositories and higher rate limits
    pub token: Option<String>,
    /// REST API base URL
    pub api_url: String,
    /// Web base URL, used for the channel link
    pub server_url: String,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Empty values count as unset. A missing or malformed
    /// `GITHUB_REPOSITORY` is an [`AppcastError`] with exit code 2.
    pub fn from_env<R: Runtime + ?Sized>(runtime: &R) -> Result<Self> {
        let repo_str = read_var(runtime, REPOSITORY_VAR).ok_or(AppcastError::MissingRepository)?;
        let repo = repo_str
            .parse::<RepoId>()
            .map_err(|_| AppcastError::InvalidRepository(repo_str.clone()))?;

        let token = read_var(runtime, TOKEN_VAR);
        let api_url = read_var(runtime, API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let server_url =
            read_var(runtime, SERVER_URL_VAR).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        debug!(
            "Resolved config: repo={}, api_url={}, server_url={}, token={}",
            repo,
            api_url,
            server_url,
            if token.is_some() { "set" } else { "unset" }
        );

        Ok(Self {
            repo,
            token,
            api_url,
            server_url,
        })
    }

    /// Web page of the repository, e.g. `https://github.com/owner/repo`
    pub fn repo_url(&self) -> String {
        format!("{}/{}", self.server_url.trim_end_matches('/'), self.repo)
    }
}

fn read_var<R: Runtime + ?Sized>(runtime: &R, key: &str) -> Option<String> {
    runtime.env_var(key).ok().filter(|value| !value.is_empty())
}
