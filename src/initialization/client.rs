//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients the
//! pipeline uses: a browser-like client for redirect resolution and a bare
//! client for reputation API calls.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::MAX_REDIRECT_HOPS;
use crate::error_handling::InitializationError;

/// Initializes the redirect-following client used by the resolver.
///
/// Creates a `reqwest::Client` configured with:
/// - A conventional browser User-Agent (some hosts block obvious bots)
/// - Redirect following with a bounded hop count
/// - The resolve timeout
///
/// # Arguments
///
/// * `timeout_seconds` - Per-request timeout
/// * `user_agent` - User-Agent header value sent with every request
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_resolver_client(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the client used for reputation API calls.
///
/// The API authenticates via the `x-apikey` header set per request; the
/// client itself only carries the lookup timeout.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_reputation_client(
    timeout_seconds: u64,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_client_builds() {
        let client = init_resolver_client(7, "Mozilla/5.0 test");
        assert!(client.is_ok());
    }

    #[test]
    fn test_reputation_client_builds() {
        let client = init_reputation_client(10);
        assert!(client.is_ok());
    }
}
