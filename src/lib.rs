//! phish_sentry library: message risk analysis
//!
//! This library analyzes chat messages for phishing. It extracts URLs from
//! free text, follows their redirects, checks each destination against a URL
//! reputation service, classifies the message text, and assembles a
//! human-readable risk report with deterministic risk tiers.
//!
//! # Example
//!
//! ```no_run
//! use phish_sentry::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     message: vec!["Please verify your password at vk-promo.example/login".to_string()],
//!     ..Default::default()
//! };
//!
//! let (report, _stats) = run_analysis(config).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod analyzer;
mod classify;
pub mod config;
mod error_handling;
mod extract;
pub mod initialization;
mod quiz;
mod report;
mod reputation;
mod resolve;

// Re-export public API
pub use analyzer::MessageAnalyzer;
pub use classify::{
    Classification, ClassifierBackend, KeywordBackend, Prediction, TextAnalyzer, TextLabel,
    Translator,
};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    ClassifyError, ErrorType, InfoType, LookupError, ProcessingStats, WarningType,
};
pub use extract::{extract_urls, ExtractedUrl};
pub use quiz::{run_quiz, AnswerOutcome, QuizQuestion, QuizSession, SessionStore, QUESTION_BANK};
pub use report::{grade_lookup, grade_stats, grade_text, Report, RiskPolicy, RiskTier};
pub use reputation::{AnalysisStats, ReputationClient, ReputationVerdict};
pub use resolve::RedirectResolver;
pub use run::{run_analysis, run_security_quiz};

// Internal run module (wires configuration into the pipeline)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::AsyncReadExt;

    use crate::analyzer::MessageAnalyzer;
    use crate::classify::{KeywordBackend, TextAnalyzer};
    use crate::config::{api_key_from_env, Config, API_KEY_ENV_VAR};
    use crate::error_handling::ProcessingStats;
    use crate::initialization::{init_reputation_client, init_resolver_client, init_semaphore};
    use crate::quiz::{run_quiz_with, SessionStore};
    use crate::report::{Report, RiskPolicy};
    use crate::reputation::ReputationClient;
    use crate::resolve::RedirectResolver;

    /// Runs one message analysis with the provided configuration.
    ///
    /// This is the main entry point for the library. The message is taken
    /// from `config.message` (arguments joined with spaces) or, when none
    /// were given, read from stdin. The returned report always contains a
    /// links section and a text verdict; per-URL failures and classifier
    /// failures show up as error lines, never as an `Err` here. The returned
    /// stats carry the counters tallied during the analysis; their summary is
    /// also logged at info level.
    ///
    /// # Arguments
    ///
    /// * `config` - Thresholds, timeouts and the message to analyze
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - An HTTP client cannot be initialized
    /// - No message was given and stdin cannot be read
    ///
    /// # Example
    ///
    /// ```no_run
    /// use phish_sentry::{run_analysis, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     message: vec!["check bank-login.example please".to_string()],
    ///     ..Default::default()
    /// };
    /// let (report, _stats) = run_analysis(config).await?;
    /// for line in report.lines() {
    ///     println!("{line}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_analysis(config: Config) -> Result<(Report, Arc<ProcessingStats>)> {
        let message = read_message(&config).await?;

        let resolver_client =
            init_resolver_client(config.resolve_timeout_seconds, &config.user_agent)
                .context("Failed to initialize resolver client")?;
        let reputation_client = init_reputation_client(config.lookup_timeout_seconds)
            .context("Failed to initialize reputation client")?;

        let reputation = match api_key_from_env() {
            Some(api_key) => Some(ReputationClient::new(
                reputation_client,
                api_key,
                &config.reputation_endpoint,
            )),
            None => {
                warn!("{API_KEY_ENV_VAR} is not set; URLs will be reported as unchecked");
                None
            }
        };

        let text = TextAnalyzer::new(
            Some(Arc::new(KeywordBackend::new())),
            None,
            &config.positive_label,
        );

        let policy = RiskPolicy {
            dangerous_over: config.dangerous_over,
            suspicious_over: config.suspicious_over,
            text_score_over: config.text_score_over,
        };

        let stats = Arc::new(ProcessingStats::new());
        let analyzer = MessageAnalyzer::new(
            RedirectResolver::new(resolver_client),
            reputation,
            text,
            policy,
            init_semaphore(config.max_concurrency),
            Arc::clone(&stats),
        );

        info!("Analyzing message ({} chars)", message.len());
        let report = analyzer.analyze(&message).await;

        stats.log_summary();

        Ok((report, stats))
    }

    async fn read_message(config: &Config) -> Result<String> {
        if !config.message.is_empty() {
            return Ok(config.message.join(" "));
        }
        info!("Reading message from stdin");
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read message from stdin")?;
        Ok(buffer)
    }

    /// Runs the interactive security quiz over stdin/stdout.
    ///
    /// Questions are printed as they come up; answers are read line by line.
    /// Reads block, so the whole loop runs on a dedicated thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the quiz thread cannot be joined.
    pub async fn run_security_quiz() -> Result<()> {
        tokio::task::spawn_blocking(|| {
            use std::io::BufRead;

            let store = SessionStore::new();
            let stdin = std::io::stdin();
            let answers = stdin.lock().lines().map_while(std::io::Result::ok);
            run_quiz_with(&store, "local", answers, |lines| {
                for line in lines {
                    println!("{line}");
                }
            });
        })
        .await
        .context("Quiz task failed")?;
        Ok(())
    }
}
