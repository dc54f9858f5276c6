//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for reputation lookups.
///
/// A lookup is a single best-effort round trip; none of these variants is
/// retried locally. The grader turns each into an Unknown-tier report line.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service rejected the request with HTTP 429.
    #[error("rate limited by the reputation service, try again later")]
    RateLimited,

    /// The URL had never been scanned and the follow-up scan submission failed.
    #[error("scan submission failed with status {0}")]
    SubmissionFailed(u16),

    /// The report request came back with a status the protocol does not define.
    #[error("reputation service returned status {0}")]
    UnexpectedStatus(u16),

    /// Timeout, connection failure, or any other transport-level error.
    #[error("network error: {0}")]
    Network(#[from] ReqwestError),

    /// The response body did not match the documented JSON shape.
    #[error("malformed reputation response: {0}")]
    MalformedResponse(String),
}

/// Error types for text classification.
///
/// Classification failures are reported in the text section of the report and
/// never block URL analysis.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// No classifier backend is configured.
    #[error("classifier model unavailable")]
    ModelUnavailable,

    /// The input needs translation but no translator is configured.
    #[error("translator unavailable for non-Latin input")]
    TranslatorUnavailable,

    /// The translator failed; untranslated text is never classified instead.
    #[error("translation failed: {0}")]
    Translation(String),

    /// The classifier backend itself failed.
    #[error("classifier error: {0}")]
    Backend(String),
}

/// Types of errors that can occur during message analysis.
///
/// This enum categorizes actual error conditions - failures that degrade a
/// report line to the Unknown tier or replace the text verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Reputation lookup errors
    LookupRateLimited,
    LookupSubmissionFailed,
    LookupUnexpectedStatus,
    LookupNetworkError,
    LookupMalformedResponse,
    // Resolver errors (the URL is still analyzed under its original form)
    ResolveError,
    // Text classification errors
    ClassifierError,
    TranslationError,
}

/// Types of warnings that can occur during message analysis.
///
/// Warnings indicate degraded configuration that doesn't prevent a report
/// from being produced but is worth tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingApiKey, // Reputation lookups will all fail until a key is supplied
    EmptyMessage,  // Nothing to extract or classify
}

/// Types of informational metrics that can occur during message analysis.
///
/// Info metrics track useful data points that aren't errors or warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    UrlExtracted,     // A URL-like substring was found in the message
    RedirectFollowed, // Resolution changed the URL (at least one redirect hop)
    UrlQueuedForScan, // Unseen URL submitted to the reputation service
    TextTranslated,   // Cyrillic input translated before classification
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::LookupRateLimited => "Lookup rate limited (429)",
            ErrorType::LookupSubmissionFailed => "Scan submission failed",
            ErrorType::LookupUnexpectedStatus => "Lookup unexpected status",
            ErrorType::LookupNetworkError => "Lookup network error",
            ErrorType::LookupMalformedResponse => "Lookup malformed response",
            ErrorType::ResolveError => "Redirect resolution error",
            ErrorType::ClassifierError => "Classifier error",
            ErrorType::TranslationError => "Translation error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingApiKey => "Missing reputation API key",
            WarningType::EmptyMessage => "Empty message",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::UrlExtracted => "URL extracted",
            InfoType::RedirectFollowed => "Redirect followed",
            InfoType::UrlQueuedForScan => "URL queued for scan",
            InfoType::TextTranslated => "Text translated",
        }
    }
}
