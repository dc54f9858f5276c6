//! Report assembly and line rendering.
//!
//! This module provides:
//! - Risk tiers and the grading policy (`RiskPolicy`, `RiskTier`)
//! - Renderers that turn lookup and classification outcomes into
//!   user-facing lines
//! - The `Report` container that keeps lines in presentation order
//!
//! Rendering is deliberately dumb: every judgement call lives in
//! `policy`, so a line can always be traced back to a threshold.

mod policy;

pub use policy::{grade_lookup, grade_stats, grade_text, RiskPolicy, RiskTier};

use std::fmt;

use crate::classify::Classification;
use crate::error_handling::{ClassifyError, LookupError};
use crate::reputation::ReputationVerdict;

/// Heading printed before the per-URL verdict lines.
pub const LINKS_PREAMBLE: &str = "🔎 Link check:";

/// Single info line used when the message contains no URLs.
pub const NO_LINKS_LINE: &str = "ℹ️ No links found in the message";

/// Heading printed before the text verdict line.
pub const TEXT_PREAMBLE: &str = "📝 Text analysis:";

/// An ordered sequence of report lines.
///
/// Lines are appended in presentation order and never reordered, so the
/// final output reads links first (in the order they appeared in the
/// message), then the text verdict.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Report { lines: Vec::new() }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

fn unavailable(reason: impl fmt::Display) -> String {
    format!("⚠️ could not be checked: {reason}")
}

/// Renders one per-URL verdict line.
///
/// The URL is shown exactly as the sender typed it, in backticks, so the
/// reader can match the line against the message; the canonical form used
/// for the lookup never appears here.
pub fn url_line(
    policy: &RiskPolicy,
    as_typed: &str,
    outcome: &Result<ReputationVerdict, LookupError>,
) -> String {
    let verdict = match outcome {
        Err(e) => unavailable(e),
        Ok(ReputationVerdict::Queued) => {
            "⏳ queued for scanning; ask again in about 30 seconds".to_string()
        }
        Ok(ReputationVerdict::Scanned(stats)) => match grade_stats(policy, stats) {
            RiskTier::Dangerous => format!(
                "🔴 dangerous ({} malicious, {} suspicious detections)",
                stats.malicious, stats.suspicious
            ),
            RiskTier::Suspicious => format!(
                "🟡 suspicious ({} malicious, {} suspicious detections)",
                stats.malicious, stats.suspicious
            ),
            _ => "✅ looks safe".to_string(),
        },
    };
    format!("    - `{as_typed}`: {verdict}")
}

/// Renders the per-URL line used when no reputation client is configured.
///
/// Every extracted URL still gets exactly one line, so the per-URL count
/// invariant holds whether or not an API key is present.
pub fn url_line_unchecked(as_typed: &str) -> String {
    format!(
        "    - `{as_typed}`: {}",
        unavailable("no reputation API key configured")
    )
}

/// Renders the single text-verdict line.
///
/// Confidence is shown as a whole percent only when the text is flagged;
/// a clean verdict carries no number to second-guess.
pub fn text_line(policy: &RiskPolicy, outcome: &Result<Classification, ClassifyError>) -> String {
    match outcome {
        Err(e) => format!("⚠️ The text could not be analyzed: {e}"),
        Ok(classification) => match grade_text(policy, classification) {
            RiskTier::Suspicious => format!(
                "🟡 The text looks like phishing (confidence {:.0}%)",
                classification.confidence * 100.0
            ),
            _ => "✅ The text shows no signs of phishing".to_string(),
        },
    }
}
