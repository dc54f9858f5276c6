//! Redirect resolution for extracted URLs.
//!
//! Shortened and cloaked links are expanded to their final destination before
//! the reputation lookup, so the verdict applies to the page the user would
//! actually land on.

use std::sync::Arc;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::extract::ensure_scheme;

/// Follows redirect chains to a canonical destination URL.
///
/// The wrapped client is built with redirects enabled, a bounded hop count,
/// a browser User-Agent, and the resolve timeout; see
/// [`init_resolver_client`](crate::initialization::init_resolver_client).
pub struct RedirectResolver {
    client: Arc<reqwest::Client>,
}

impl RedirectResolver {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        RedirectResolver { client }
    }

    /// Resolves `url` to the final URL after following redirects.
    ///
    /// Never fails outward: on timeout, DNS failure, refused connection, or
    /// an exhausted redirect chain the scheme-qualified input is returned
    /// unchanged and the failure is only counted and logged. A response with
    /// an error status still resolves - the effective URL is what matters
    /// here, not the page's health.
    ///
    /// # Arguments
    ///
    /// * `url` - URL to resolve; `http://` is prefixed when no scheme is present
    /// * `stats` - Counters for resolution outcomes
    ///
    /// # Returns
    ///
    /// The effective URL of the final response, or the scheme-qualified input
    /// on any failure.
    pub async fn resolve(&self, url: &str, stats: &ProcessingStats) -> String {
        let target = ensure_scheme(url);

        match self.client.get(&target).send().await {
            Ok(response) => {
                let resolved = response.url().to_string();
                if resolved != target {
                    log::debug!("Resolved {} -> {}", target, resolved);
                    stats.increment_info(InfoType::RedirectFollowed);
                }
                resolved
            }
            Err(e) => {
                log::debug!("Could not resolve {}: {}", target, e);
                stats.increment_error(ErrorType::ResolveError);
                target
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::init_resolver_client;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn resolver(timeout_seconds: u64) -> RedirectResolver {
        let client = init_resolver_client(timeout_seconds, "test-agent")
            .expect("client should build");
        RedirectResolver::new(client)
    }

    #[tokio::test]
    async fn test_redirect_chain_is_followed_to_the_final_url() {
        let server = Server::run();
        let destination = format!("http://{}/final", server.addr());
        server.expect(
            Expectation::matching(request::method_path("GET", "/start"))
                .respond_with(status_code(302).append_header("Location", destination.as_str())),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/final"))
                .respond_with(status_code(200).body("landed")),
        );

        let stats = ProcessingStats::new();
        let start = format!("http://{}/start", server.addr());
        let resolved = resolver(5).resolve(&start, &stats).await;

        assert_eq!(resolved, destination);
        assert_eq!(stats.get_info_count(InfoType::RedirectFollowed), 1);
    }

    #[tokio::test]
    async fn test_direct_response_resolves_to_itself() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/page"))
                .respond_with(status_code(200).body("ok")),
        );

        let stats = ProcessingStats::new();
        let target = format!("http://{}/page", server.addr());
        let resolved = resolver(5).resolve(&target, &stats).await;

        assert_eq!(resolved, target);
        assert_eq!(stats.get_info_count(InfoType::RedirectFollowed), 0);
    }

    #[tokio::test]
    async fn test_error_status_still_resolves() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/gone"))
                .respond_with(status_code(404).body("not here")),
        );

        let stats = ProcessingStats::new();
        let target = format!("http://{}/gone", server.addr());
        let resolved = resolver(5).resolve(&target, &stats).await;

        assert_eq!(resolved, target);
        assert_eq!(stats.get_error_count(ErrorType::ResolveError), 0);
    }

    #[tokio::test]
    async fn test_unresolvable_host_returns_input() {
        // RFC 2606 reserves .invalid, so this can never resolve
        let stats = ProcessingStats::new();
        let resolved = resolver(2)
            .resolve("http://nonexistent.invalid/page", &stats)
            .await;
        assert_eq!(resolved, "http://nonexistent.invalid/page");
        assert_eq!(stats.get_error_count(ErrorType::ResolveError), 1);
    }

    #[tokio::test]
    async fn test_bare_domain_gets_scheme_before_request() {
        let stats = ProcessingStats::new();
        let resolved = resolver(2).resolve("nonexistent.invalid", &stats).await;
        assert_eq!(resolved, "http://nonexistent.invalid");
    }

    #[tokio::test]
    async fn test_failure_counts_no_redirect_info() {
        let stats = ProcessingStats::new();
        resolver(2).resolve("http://nonexistent.invalid", &stats).await;
        assert_eq!(stats.get_info_count(InfoType::RedirectFollowed), 0);
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --lib resolve -- --ignored (needs live network)
    async fn test_live_http_upgrade_is_followed() {
        let stats = ProcessingStats::new();
        let resolved = resolver(10).resolve("http://github.com", &stats).await;
        assert!(resolved.starts_with("https://"));
    }
}
