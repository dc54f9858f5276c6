//! URL reputation lookups against a VirusTotal-style service.
//!
//! This module provides:
//! - The report/submission protocol (GET by URL identifier, POST on miss)
//! - Typed verdicts and lookup errors
//!
//! Every lookup is a single best-effort round trip with no local retry loop
//! and no caching; repeated lookups of the same URL always hit the service.

mod types;

pub use types::{AnalysisStats, ReputationVerdict};

use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

use crate::config::{API_KEY_HEADER, HTTP_STATUS_NOT_FOUND, HTTP_STATUS_TOO_MANY_REQUESTS};
use crate::error_handling::LookupError;

// Response shape of the report resource. Only the analysis-stats path is
// read; the service sends far more.
#[derive(Deserialize)]
struct ReportResponse {
    data: ReportData,
}

#[derive(Deserialize)]
struct ReportData {
    attributes: ReportAttributes,
}

#[derive(Deserialize)]
struct ReportAttributes {
    last_analysis_stats: AnalysisStats,
}

/// Client for the URL-reputation REST API.
///
/// Holds a pre-built HTTP client with the lookup timeout, the API key sent on
/// every request, and the base endpoint. The endpoint is configurable so
/// tests can point the client at a local mock server.
pub struct ReputationClient {
    client: Arc<reqwest::Client>,
    api_key: String,
    endpoint: String,
}

impl ReputationClient {
    pub fn new(client: Arc<reqwest::Client>, api_key: String, endpoint: &str) -> Self {
        ReputationClient {
            client,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// The service's resource identifier for a URL: URL-safe base64 of the
    /// UTF-8 bytes with padding stripped.
    pub fn url_id(url: &str) -> String {
        URL_SAFE_NO_PAD.encode(url.as_bytes())
    }

    /// Looks up the reputation report for `url`.
    ///
    /// A known URL yields `Scanned` with its detection counters. An unknown
    /// URL (HTTP 404) triggers exactly one scan submission; a successful
    /// submission yields `Queued`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::RateLimited`] on HTTP 429
    /// - [`LookupError::SubmissionFailed`] when the 404 follow-up submission
    ///   is rejected
    /// - [`LookupError::UnexpectedStatus`] on any other non-200 status
    /// - [`LookupError::Network`] on timeouts and transport failures
    /// - [`LookupError::MalformedResponse`] when the 200 body does not carry
    ///   the analysis-stats path
    pub async fn lookup(&self, url: &str) -> Result<ReputationVerdict, LookupError> {
        let resource = format!("{}/urls/{}", self.endpoint, Self::url_id(url));
        log::debug!("Looking up reputation report for {}", url);

        let response = self
            .client
            .get(&resource)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let body = response.text().await?;
                let report: ReportResponse = serde_json::from_str(&body)
                    .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;
                Ok(ReputationVerdict::Scanned(
                    report.data.attributes.last_analysis_stats,
                ))
            }
            HTTP_STATUS_NOT_FOUND => {
                log::debug!("No prior scan for {}, submitting", url);
                self.submit(url).await?;
                Ok(ReputationVerdict::Queued)
            }
            HTTP_STATUS_TOO_MANY_REQUESTS => Err(LookupError::RateLimited),
            status => Err(LookupError::UnexpectedStatus(status)),
        }
    }

    /// Submits `url` for scanning after a report miss.
    ///
    /// The service acknowledges with HTTP 200; anything else is a
    /// [`LookupError::SubmissionFailed`].
    async fn submit(&self, url: &str) -> Result<(), LookupError> {
        let response = self
            .client
            .post(format!("{}/urls", self.endpoint))
            .header(API_KEY_HEADER, &self.api_key)
            .form(&[("url", url)])
            .send()
            .await?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            Err(LookupError::SubmissionFailed(status))
        }
    }
}
