//! Text classification with optional cross-lingual normalization.
//!
//! This module provides:
//! - The [`TextAnalyzer`] adapter wrapping a pluggable classifier backend
//! - Capability traits for classifier and translator implementations
//! - A keyword-heuristic backend usable without model weights
//!
//! Cyrillic input is translated sentence-by-sentence before scoring; if
//! translation fails the adapter reports the error rather than silently
//! classifying text the model was never trained on.

mod backend;
mod keyword;
mod language;

pub use backend::{ClassifierBackend, Prediction, Translator};
pub use keyword::KeywordBackend;
pub use language::{contains_cyrillic, split_sentences};

use std::sync::Arc;

use crate::error_handling::{ClassifyError, InfoType, ProcessingStats};

/// Discrete label of a classified message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLabel {
    Phishing,
    Safe,
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: TextLabel,
    /// The backend's own probability estimate in `[0, 1]`, unmodified.
    pub confidence: f64,
}

/// Adapter from raw message text to a phishing/safe classification.
///
/// Holds the injected backend and translator capabilities plus the positive
/// label convention. Labels are matched case-insensitively against the
/// configured positive label (default `phishing`); models that emit
/// positional tokens are supported by configuring e.g. `LABEL_1`.
pub struct TextAnalyzer {
    backend: Option<Arc<dyn ClassifierBackend>>,
    translator: Option<Arc<dyn Translator>>,
    positive_label: String,
}

impl TextAnalyzer {
    pub fn new(
        backend: Option<Arc<dyn ClassifierBackend>>,
        translator: Option<Arc<dyn Translator>>,
        positive_label: &str,
    ) -> Self {
        TextAnalyzer {
            backend,
            translator,
            positive_label: positive_label.to_string(),
        }
    }

    /// Classifies `text` as phishing or safe.
    ///
    /// Cyrillic input is translated first; the translated text is what gets
    /// scored. Input is clipped to the backend's token window before
    /// prediction.
    ///
    /// # Errors
    ///
    /// - [`ClassifyError::ModelUnavailable`] when no backend is configured
    /// - [`ClassifyError::TranslatorUnavailable`] for Cyrillic input without
    ///   a translator
    /// - [`ClassifyError::Translation`] when the translator fails; the
    ///   untranslated original is never classified as a fallback
    /// - [`ClassifyError::Backend`] when the backend itself fails
    pub fn classify(
        &self,
        text: &str,
        stats: &ProcessingStats,
    ) -> Result<Classification, ClassifyError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(ClassifyError::ModelUnavailable)?;

        let normalized = if contains_cyrillic(text) && !backend.accepts_cyrillic() {
            let translated = self.translate(text)?;
            stats.increment_info(InfoType::TextTranslated);
            translated
        } else {
            text.to_string()
        };

        let clipped = backend.truncate_to_tokens(&normalized);
        let prediction = backend
            .predict(&clipped)
            .map_err(|e| ClassifyError::Backend(e.to_string()))?;

        let label = if prediction
            .label
            .eq_ignore_ascii_case(&self.positive_label)
        {
            TextLabel::Phishing
        } else {
            TextLabel::Safe
        };

        log::debug!(
            "Classified text as {:?} (backend label '{}', score {:.3})",
            label,
            prediction.label,
            prediction.score
        );

        Ok(Classification {
            label,
            confidence: prediction.score,
        })
    }

    /// Translates sentence-by-sentence and rejoins with single spaces.
    fn translate(&self, text: &str) -> Result<String, ClassifyError> {
        let translator = self
            .translator
            .as_ref()
            .ok_or(ClassifyError::TranslatorUnavailable)?;

        let mut translated = Vec::new();
        for sentence in split_sentences(text) {
            let out = translator
                .translate_sentence(sentence)
                .map_err(|e| ClassifyError::Translation(e.to_string()))?;
            translated.push(out);
        }
        Ok(translated.join(" "))
    }
}
