//! Error categorization.
//!
//! This module maps typed pipeline errors onto the counter enums tracked by
//! [`ProcessingStats`](super::ProcessingStats).

use super::stats::ProcessingStats;
use super::types::{ClassifyError, ErrorType, LookupError};

/// Categorizes a reputation-lookup error into an [`ErrorType`] counter.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::RateLimited => ErrorType::LookupRateLimited,
        LookupError::SubmissionFailed(_) => ErrorType::LookupSubmissionFailed,
        LookupError::UnexpectedStatus(_) => ErrorType::LookupUnexpectedStatus,
        LookupError::Network(_) => ErrorType::LookupNetworkError,
        LookupError::MalformedResponse(_) => ErrorType::LookupMalformedResponse,
    }
}

/// Categorizes a classification error into an [`ErrorType`] counter.
///
/// Translation failures are counted separately from backend failures so a
/// broken translator is distinguishable from a broken model in the summary.
pub fn categorize_classify_error(error: &ClassifyError) -> ErrorType {
    match error {
        ClassifyError::TranslatorUnavailable | ClassifyError::Translation(_) => {
            ErrorType::TranslationError
        }
        ClassifyError::ModelUnavailable | ClassifyError::Backend(_) => ErrorType::ClassifierError,
    }
}

/// Logs a lookup error and bumps the matching counter.
pub fn record_lookup_error(stats: &ProcessingStats, url: &str, error: &LookupError) {
    log::warn!("Reputation lookup failed for {}: {}", url, error);
    stats.increment_error(categorize_lookup_error(error));
}

/// Logs a classification error and bumps the matching counter.
pub fn record_classify_error(stats: &ProcessingStats, error: &ClassifyError) {
    log::warn!("Text classification failed: {}", error);
    stats.increment_error(categorize_classify_error(error));
}
