//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, size limits, and risk-policy defaults.

// Network operation timeouts
/// Redirect-resolution timeout in seconds.
/// Generous enough for slow shorteners, small enough not to stall a report.
pub const RESOLVE_TIMEOUT_SECS: u64 = 7;
/// Reputation-service request timeout in seconds
pub const LOOKUP_TIMEOUT_SECS: u64 = 10;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a modern Chrome browser on Windows; URL shorteners and landing
/// pages commonly refuse bare library user agents.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Reputation service (VirusTotal API v3)
/// Base endpoint for URL report/submission resources.
/// Overridable via `--reputation-endpoint` so tests can target a mock server.
pub const DEFAULT_REPUTATION_ENDPOINT: &str = "https://www.virustotal.com/api/v3";
/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-apikey";
/// Environment variable holding the reputation-service API key
pub const API_KEY_ENV_VAR: &str = "VIRUSTOTAL_API_KEY";

// Classifier input limits
/// Maximum classifier input length in tokens.
/// Matches the 512-token window of the BERT-family models this adapter wraps;
/// longer input is truncated before scoring so the model never clips silently.
pub const CLASSIFIER_MAX_TOKENS: usize = 512;

// Risk policy defaults
/// Detection count above which a URL is graded Dangerous
pub const DEFAULT_DANGEROUS_OVER: u32 = 1;
/// Detection count above which a URL is graded Suspicious
pub const DEFAULT_SUSPICIOUS_OVER: u32 = 0;
/// Classifier confidence above which text is flagged (strict greater-than)
pub const DEFAULT_TEXT_SCORE_OVER: f64 = 0.5;
/// Classifier output token meaning "this is phishing"
pub const DEFAULT_POSITIVE_LABEL: &str = "phishing";

// Concurrency
/// Maximum concurrent per-URL lookups within one analysis
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
