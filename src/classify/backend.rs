//! Pluggable classifier and translator capabilities.
//!
//! The pipeline treats "classify text" and "translate text" as injected
//! capabilities: anything implementing these traits can be wired into the
//! [`TextAnalyzer`](super::TextAnalyzer). Backends report failures through
//! `anyhow`; the adapter maps them onto the typed classification errors.

use anyhow::Result;

use crate::config::CLASSIFIER_MAX_TOKENS;

use super::language::truncate_tokens;

/// A single prediction from a classifier backend.
///
/// The label vocabulary is backend-specific; the adapter maps it onto
/// phishing/safe using its configured positive label. The score is the
/// backend's own probability estimate in `[0, 1]`, passed through without
/// local calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Black-box phishing/spam text classifier.
pub trait ClassifierBackend: Send + Sync {
    /// Maximum input length in tokens.
    fn max_tokens(&self) -> usize {
        CLASSIFIER_MAX_TOKENS
    }

    /// Whether Cyrillic input is in this backend's working language.
    ///
    /// When `false` (the default, matching English-only models), Cyrillic
    /// input is translated before scoring.
    fn accepts_cyrillic(&self) -> bool {
        false
    }

    /// Clips text to this backend's input window before scoring.
    ///
    /// The default counts whitespace-delimited tokens; backends with subword
    /// vocabularies override this with their own tokenizer so the model never
    /// sees input it would clip differently.
    fn truncate_to_tokens(&self, text: &str) -> String {
        truncate_tokens(text, self.max_tokens())
    }

    /// Scores the (already truncated) text.
    fn predict(&self, text: &str) -> Result<Prediction>;
}

/// Sentence-level translation into the classifier's working language.
///
/// Only exercised for Cyrillic input; the adapter feeds one sentence at a
/// time and joins the results.
pub trait Translator: Send + Sync {
    fn translate_sentence(&self, sentence: &str) -> Result<String>;
}
