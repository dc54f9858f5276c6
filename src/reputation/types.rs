//! Reputation verdict types.

use serde::Deserialize;

/// Detection counters from the service's most recent analysis of a URL.
///
/// Counters the service omits deserialize to zero, matching how a brand-new
/// scan report may carry only partial stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisStats {
    #[serde(default)]
    pub malicious: u32,
    #[serde(default)]
    pub suspicious: u32,
    #[serde(default)]
    pub harmless: u32,
}

/// Successful outcome of a reputation lookup.
///
/// Failures (rate limiting, network, malformed responses) are carried by
/// [`LookupError`](crate::error_handling::LookupError) instead, so callers
/// match on `Result<ReputationVerdict, LookupError>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReputationVerdict {
    /// The service had a prior scan of this URL; counters attached.
    Scanned(AnalysisStats),
    /// The service had never seen this URL; one scan submission was made and
    /// the result is pending. The caller re-invokes later; no polling here.
    Queued,
}
