//! HTTP client module with error classification.

mod client;

pub use client::{HttpClient, REQUEST_TIMEOUT_SECS, build_http_client};
