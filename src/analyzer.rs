//! Message analysis orchestration.
//!
//! This module provides:
//! - The [`MessageAnalyzer`] that sequences extraction, resolution,
//!   reputation lookup, text classification and report assembly
//! - Per-step failure isolation, so one bad URL or a missing model never
//!   aborts the rest of the report
//!
//! URL checks for one message run concurrently; report lines still come out
//! in the order the URLs appeared in the message.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::classify::TextAnalyzer;
use crate::error_handling::{
    record_classify_error, record_lookup_error, ClassifyError, InfoType, ProcessingStats,
    WarningType,
};
use crate::extract::{extract_urls, ExtractedUrl};
use crate::report::{
    text_line, url_line, url_line_unchecked, Report, RiskPolicy, LINKS_PREAMBLE, NO_LINKS_LINE,
    TEXT_PREAMBLE,
};
use crate::reputation::{ReputationClient, ReputationVerdict};
use crate::resolve::RedirectResolver;

/// Single-pass analysis pipeline over one message.
///
/// All fields are read-only after construction; the analyzer can serve
/// concurrent `analyze` calls without locking.
pub struct MessageAnalyzer {
    resolver: RedirectResolver,
    reputation: Option<ReputationClient>,
    text: Arc<TextAnalyzer>,
    policy: RiskPolicy,
    semaphore: Arc<Semaphore>,
    stats: Arc<ProcessingStats>,
}

impl MessageAnalyzer {
    pub fn new(
        resolver: RedirectResolver,
        reputation: Option<ReputationClient>,
        text: TextAnalyzer,
        policy: RiskPolicy,
        semaphore: Arc<Semaphore>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        MessageAnalyzer {
            resolver,
            reputation,
            text: Arc::new(text),
            policy,
            semaphore,
            stats,
        }
    }

    /// Analyzes one message and assembles the risk report.
    ///
    /// The report always has a links section (per-URL verdict lines in the
    /// order the URLs appeared, or a single informational line when none
    /// were found) followed by the text verdict. No sub-step failure aborts
    /// the pipeline; failures become error lines.
    ///
    /// # Arguments
    ///
    /// * `message` - Raw message text as received from the transport
    pub async fn analyze(&self, message: &str) -> Report {
        if message.trim().is_empty() {
            self.stats.increment_warning(WarningType::EmptyMessage);
        }

        let urls = extract_urls(message);
        for url in &urls {
            log::debug!("Extracted URL {} (canonical {})", url.as_typed, url.canonical);
            self.stats.increment_info(InfoType::UrlExtracted);
        }
        if self.reputation.is_none() && !urls.is_empty() {
            log::warn!("No reputation API key configured; link checks are unavailable");
            self.stats.increment_warning(WarningType::MissingApiKey);
        }

        // The classifier is synchronous and CPU-bound; run it off the async
        // runtime while the URL checks are in flight.
        let text_analyzer = Arc::clone(&self.text);
        let text_stats = Arc::clone(&self.stats);
        let text_input = message.to_string();
        let classify_task =
            tokio::task::spawn_blocking(move || text_analyzer.classify(&text_input, &text_stats));

        // join_all preserves input order regardless of completion order.
        let url_checks = join_all(urls.iter().map(|url| self.check_url(url)));
        let (url_lines, classify_joined) = tokio::join!(url_checks, classify_task);

        let text_outcome = match classify_joined {
            Ok(outcome) => outcome,
            Err(e) => Err(ClassifyError::Backend(format!("classifier task failed: {e}"))),
        };
        if let Err(e) = &text_outcome {
            record_classify_error(&self.stats, e);
        }

        let mut report = Report::new();
        if url_lines.is_empty() {
            report.push(NO_LINKS_LINE.to_string());
        } else {
            report.push(LINKS_PREAMBLE.to_string());
            for line in url_lines {
                report.push(line);
            }
        }
        report.push(TEXT_PREAMBLE.to_string());
        report.push(text_line(&self.policy, &text_outcome));
        report
    }

    /// Resolves, looks up and grades one URL, returning its report line.
    async fn check_url(&self, url: &ExtractedUrl) -> String {
        let client = match &self.reputation {
            Some(client) => client,
            None => return url_line_unchecked(&url.as_typed),
        };

        // The semaphore is never closed; if acquisition fails anyway, run
        // unthrottled rather than drop the URL.
        let _permit = self.semaphore.acquire().await.ok();

        let final_url = self.resolver.resolve(&url.canonical, &self.stats).await;
        let outcome = client.lookup(&final_url).await;
        match &outcome {
            Ok(ReputationVerdict::Queued) => {
                self.stats.increment_info(InfoType::UrlQueuedForScan);
            }
            Err(e) => record_lookup_error(&self.stats, &url.as_typed, e),
            Ok(ReputationVerdict::Scanned(_)) => {}
        }
        url_line(&self.policy, &url.as_typed, &outcome)
    }
}
