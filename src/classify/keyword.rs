//! Weighted keyword heuristic classifier.
//!
//! A self-contained [`ClassifierBackend`] so the binary runs without model
//! weights: scores text by phishing-keyword hits (credential prompts,
//! urgency words, payment bait) in English and Russian. Useful as a default
//! and as a deterministic stand-in wherever a real model is overkill.

use anyhow::Result;

use crate::config::CLASSIFIER_MAX_TOKENS;

use super::backend::{ClassifierBackend, Prediction};

/// Phishing indicator words with their additive weights.
///
/// Weights are tuned so one weak hit stays below the flagging threshold
/// while two strong signals (e.g. "verify" + "password") cross it.
const PHISHING_KEYWORDS: &[(&str, f64)] = &[
    // Credential prompts
    ("password", 0.35),
    ("login", 0.20),
    ("account", 0.20),
    ("verify", 0.30),
    ("confirm", 0.25),
    ("security", 0.15),
    // Urgency
    ("urgent", 0.30),
    ("immediately", 0.25),
    ("suspended", 0.35),
    // Payment bait
    ("bank", 0.20),
    ("card", 0.20),
    ("transfer", 0.20),
    ("prize", 0.30),
    ("winner", 0.25),
    ("click", 0.10),
    // Russian equivalents
    ("пароль", 0.35),
    ("логин", 0.20),
    ("подтвердите", 0.30),
    ("срочно", 0.30),
    ("карта", 0.20),
    ("банк", 0.20),
    ("перевод", 0.20),
    ("приз", 0.30),
];

/// Score assigned to the phishing label is capped below certainty; a keyword
/// heuristic should never claim 100% confidence.
const MAX_PHISHING_SCORE: f64 = 0.95;

/// Nominal confidence reported with the safe label when nothing matched.
const SAFE_SCORE: f64 = 0.90;

/// Keyword-hit classifier backend.
pub struct KeywordBackend {
    max_tokens: usize,
}

impl KeywordBackend {
    pub fn new() -> Self {
        KeywordBackend {
            max_tokens: CLASSIFIER_MAX_TOKENS,
        }
    }

    /// Sum of weights for keywords present in the lowercased text.
    ///
    /// Substring matching on purpose: inflected forms ("passwords",
    /// "банковский") still hit their stem.
    fn raw_score(text: &str) -> f64 {
        let lowered = text.to_lowercase();
        PHISHING_KEYWORDS
            .iter()
            .filter(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, weight)| weight)
            .sum()
    }
}

impl Default for KeywordBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierBackend for KeywordBackend {
    fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    // The keyword list carries Russian stems, so no translation pass is needed
    fn accepts_cyrillic(&self) -> bool {
        true
    }

    fn predict(&self, text: &str) -> Result<Prediction> {
        let raw = Self::raw_score(text);
        if raw > 0.0 {
            Ok(Prediction {
                label: "phishing".to_string(),
                score: raw.min(MAX_PHISHING_SCORE),
            })
        } else {
            Ok(Prediction {
                label: "safe".to_string(),
                score: SAFE_SCORE,
            })
        }
    }
}
