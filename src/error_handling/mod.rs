//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed error definitions for each pipeline stage
//! - Error categorization onto counters
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Error types are categorized into:
//! - **Errors**: Failures that degrade part of the report
//! - **Warnings**: Degraded configuration that still yields a report
//! - **Info**: Informational metrics (extractions, redirects, queued scans)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{record_classify_error, record_lookup_error};
pub use stats::ProcessingStats;
pub use types::{
    ClassifyError, ErrorType, InfoType, InitializationError, LookupError, WarningType,
};
