//! HTTP client that classifies failures into fetch and parse errors.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::AppcastError;

/// Upper bound for a single request, including reading the body.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Build an HTTP client for the GitHub API with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("token {}", token))
            .context("GITHUB_TOKEN contains characters not allowed in an HTTP header")?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(token));
    }

    let client = Client::builder()
        .user_agent("appcast-gen")
        .default_headers(headers)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    Ok(HttpClient::new(client))
}

/// Keeps just enough of a token to tell tokens apart in logs.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}

/// Thin wrapper over a reqwest Client. Performs each request exactly once.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Connection failures and non-2xx statuses are reported as
    /// [`AppcastError::Fetch`]; a body that is not the expected JSON is
    /// reported as [`AppcastError::Parse`].
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .with_context(|| AppcastError::Fetch(url.to_string()))?;

        let body = response
            .text()
            .await
            .with_context(|| AppcastError::Fetch(url.to_string()))?;

        debug!("Received {} bytes from {}", body.len(), url);

        serde_json::from_str(&body).with_context(|| AppcastError::Parse(url.to_string()))
    }
}
