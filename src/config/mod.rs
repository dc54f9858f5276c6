//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, risk-policy defaults)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel};

use clap::Parser;

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line
/// flags.
///
/// # Examples
///
/// ```bash
/// # Analyze a message given as arguments
/// phish_sentry "Verify your account at http://paypal-login.example.com"
///
/// # Analyze a message piped on stdin
/// echo "click bit.ly/2x8F1" | phish_sentry
///
/// # Run the interactive security quiz
/// phish_sentry --quiz
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "phish_sentry",
    about = "Checks a message for phishing: URL reputation, text classification, risk report."
)]
pub struct Config {
    /// Message text to analyze; reads one message from stdin when omitted
    #[arg(value_parser)]
    pub message: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Redirect-resolution timeout in seconds
    #[arg(long, default_value_t = RESOLVE_TIMEOUT_SECS)]
    pub resolve_timeout_seconds: u64,

    /// Reputation-lookup timeout in seconds
    #[arg(long, default_value_t = LOOKUP_TIMEOUT_SECS)]
    pub lookup_timeout_seconds: u64,

    /// HTTP User-Agent header value.
    ///
    /// Defaults to a Chrome-like browser string; shorteners and landing pages
    /// commonly refuse bare library user agents.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum concurrent per-URL lookups within one analysis
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Reputation-service base endpoint.
    ///
    /// Points at the production service by default; tests and on-premise
    /// mirrors can redirect it.
    #[arg(long, default_value = DEFAULT_REPUTATION_ENDPOINT)]
    pub reputation_endpoint: String,

    /// Classifier output token treated as the phishing label.
    ///
    /// Matched case-insensitively. Models that emit positional tokens can be
    /// wired in with e.g. `--positive-label LABEL_1`.
    #[arg(long, default_value = DEFAULT_POSITIVE_LABEL)]
    pub positive_label: String,

    /// Detection count above which a URL is graded Dangerous
    #[arg(long, default_value_t = DEFAULT_DANGEROUS_OVER)]
    pub dangerous_over: u32,

    /// Detection count above which a URL is graded Suspicious
    #[arg(long, default_value_t = DEFAULT_SUSPICIOUS_OVER)]
    pub suspicious_over: u32,

    /// Classifier confidence above which text is flagged (strict greater-than)
    #[arg(long, default_value_t = DEFAULT_TEXT_SCORE_OVER)]
    pub text_score_over: f64,

    /// Run the interactive security quiz instead of analyzing a message
    #[arg(long)]
    pub quiz: bool,

    /// Print processing-stats summary after the report
    #[arg(long)]
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            resolve_timeout_seconds: RESOLVE_TIMEOUT_SECS,
            lookup_timeout_seconds: LOOKUP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            reputation_endpoint: DEFAULT_REPUTATION_ENDPOINT.to_string(),
            positive_label: DEFAULT_POSITIVE_LABEL.to_string(),
            dangerous_over: DEFAULT_DANGEROUS_OVER,
            suspicious_over: DEFAULT_SUSPICIOUS_OVER,
            text_score_over: DEFAULT_TEXT_SCORE_OVER,
            quiz: false,
            stats: false,
        }
    }
}

/// Reads the reputation-service API key from the environment.
///
/// Returns `None` when the variable is unset or empty; the caller degrades
/// lookups to error lines instead of aborting.
pub fn api_key_from_env() -> Option<String> {
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Some(key),
        _ => None,
    }
}
