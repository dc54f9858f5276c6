//! Risk tiers and the grading policy.
//!
//! Grading is a pure function from verdicts to tiers; the thresholds are
//! policy values so deployments can tune them without a code change.

use crate::classify::{Classification, TextLabel};
use crate::config::{DEFAULT_DANGEROUS_OVER, DEFAULT_SUSPICIOUS_OVER, DEFAULT_TEXT_SCORE_OVER};
use crate::error_handling::LookupError;
use crate::reputation::{AnalysisStats, ReputationVerdict};

/// Discrete risk bucket for display.
///
/// Never stored; recomputed per report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Dangerous,
    Suspicious,
    Safe,
    /// No usable signal: lookup failed or the scan is still pending.
    Unknown,
}

/// Tunable grading thresholds.
///
/// All comparisons are strict greater-than. With the defaults, one detection
/// makes a URL Suspicious and a second makes it Dangerous; classifier
/// confidence must exceed 0.5 to flag text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskPolicy {
    /// Detection count above which a URL is Dangerous.
    pub dangerous_over: u32,
    /// Detection count above which a URL is Suspicious.
    pub suspicious_over: u32,
    /// Classifier confidence above which text is flagged.
    pub text_score_over: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        RiskPolicy {
            dangerous_over: DEFAULT_DANGEROUS_OVER,
            suspicious_over: DEFAULT_SUSPICIOUS_OVER,
            text_score_over: DEFAULT_TEXT_SCORE_OVER,
        }
    }
}

/// Grades detection counters into a tier.
///
/// `malicious` and `suspicious` detections carry equal weight; `harmless`
/// counts never downgrade a verdict.
pub fn grade_stats(policy: &RiskPolicy, stats: &AnalysisStats) -> RiskTier {
    if stats.malicious > policy.dangerous_over || stats.suspicious > policy.dangerous_over {
        RiskTier::Dangerous
    } else if stats.malicious > policy.suspicious_over || stats.suspicious > policy.suspicious_over
    {
        RiskTier::Suspicious
    } else {
        RiskTier::Safe
    }
}

/// Grades a full lookup outcome into a tier.
///
/// Errors and pending scans are both Unknown: there is no signal to grade,
/// only a reason to explain.
pub fn grade_lookup(
    policy: &RiskPolicy,
    outcome: &Result<ReputationVerdict, LookupError>,
) -> RiskTier {
    match outcome {
        Ok(ReputationVerdict::Scanned(stats)) => grade_stats(policy, stats),
        Ok(ReputationVerdict::Queued) => RiskTier::Unknown,
        Err(_) => RiskTier::Unknown,
    }
}

/// Grades a text classification into a tier.
///
/// Only a phishing label with confidence strictly above the threshold flags
/// the text; everything else is Safe.
pub fn grade_text(policy: &RiskPolicy, classification: &Classification) -> RiskTier {
    if classification.label == TextLabel::Phishing
        && classification.confidence > policy.text_score_over
    {
        RiskTier::Suspicious
    } else {
        RiskTier::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats(malicious: u32, suspicious: u32) -> AnalysisStats {
        AnalysisStats {
            malicious,
            suspicious,
            harmless: 40,
        }
    }

    #[test]
    fn test_two_detections_are_dangerous() {
        let policy = RiskPolicy::default();
        assert_eq!(grade_stats(&policy, &stats(2, 0)), RiskTier::Dangerous);
        assert_eq!(grade_stats(&policy, &stats(0, 2)), RiskTier::Dangerous);
        assert_eq!(grade_stats(&policy, &stats(5, 3)), RiskTier::Dangerous);
    }

    #[test]
    fn test_one_detection_is_suspicious() {
        let policy = RiskPolicy::default();
        assert_eq!(grade_stats(&policy, &stats(1, 0)), RiskTier::Suspicious);
        assert_eq!(grade_stats(&policy, &stats(0, 1)), RiskTier::Suspicious);
        assert_eq!(grade_stats(&policy, &stats(1, 1)), RiskTier::Suspicious);
    }

    #[test]
    fn test_no_detections_is_safe() {
        let policy = RiskPolicy::default();
        assert_eq!(grade_stats(&policy, &stats(0, 0)), RiskTier::Safe);
    }

    #[test]
    fn test_harmless_count_never_downgrades() {
        let policy = RiskPolicy::default();
        let s = AnalysisStats {
            malicious: 2,
            suspicious: 0,
            harmless: 90,
        };
        assert_eq!(grade_stats(&policy, &s), RiskTier::Dangerous);
    }

    #[test]
    fn test_thresholds_are_tunable() {
        let strict = RiskPolicy {
            dangerous_over: 0,
            suspicious_over: 0,
            text_score_over: 0.5,
        };
        assert_eq!(grade_stats(&strict, &stats(1, 0)), RiskTier::Dangerous);

        let lenient = RiskPolicy {
            dangerous_over: 10,
            suspicious_over: 5,
            text_score_over: 0.5,
        };
        assert_eq!(grade_stats(&lenient, &stats(3, 0)), RiskTier::Safe);
        assert_eq!(grade_stats(&lenient, &stats(6, 0)), RiskTier::Suspicious);
    }

    #[test]
    fn test_queued_and_errors_are_unknown() {
        let policy = RiskPolicy::default();
        assert_eq!(
            grade_lookup(&policy, &Ok(ReputationVerdict::Queued)),
            RiskTier::Unknown
        );
        assert_eq!(
            grade_lookup(&policy, &Err(LookupError::RateLimited)),
            RiskTier::Unknown
        );
        assert_eq!(
            grade_lookup(&policy, &Err(LookupError::UnexpectedStatus(500))),
            RiskTier::Unknown
        );
    }

    #[test]
    fn test_text_threshold_is_strict() {
        let policy = RiskPolicy::default();
        let at_threshold = Classification {
            label: TextLabel::Phishing,
            confidence: 0.5,
        };
        assert_eq!(grade_text(&policy, &at_threshold), RiskTier::Safe);

        let above = Classification {
            label: TextLabel::Phishing,
            confidence: 0.51,
        };
        assert_eq!(grade_text(&policy, &above), RiskTier::Suspicious);
    }

    #[test]
    fn test_confident_safe_label_is_never_flagged() {
        let policy = RiskPolicy::default();
        let safe = Classification {
            label: TextLabel::Safe,
            confidence: 0.99,
        };
        assert_eq!(grade_text(&policy, &safe), RiskTier::Safe);
    }

    proptest! {
        #[test]
        fn prop_more_detections_never_lower_the_tier(
            malicious in 0u32..20,
            suspicious in 0u32..20,
        ) {
            fn rank(tier: RiskTier) -> u8 {
                match tier {
                    RiskTier::Safe => 0,
                    RiskTier::Suspicious => 1,
                    RiskTier::Dangerous => 2,
                    RiskTier::Unknown => 0,
                }
            }
            let policy = RiskPolicy::default();
            let base = rank(grade_stats(&policy, &stats(malicious, suspicious)));
            let bumped = rank(grade_stats(&policy, &stats(malicious + 1, suspicious)));
            prop_assert!(bumped >= base);
        }

        #[test]
        fn prop_tier_is_exhaustive_over_counts(
            malicious in 0u32..100,
            suspicious in 0u32..100,
        ) {
            let policy = RiskPolicy::default();
            let tier = grade_stats(&policy, &stats(malicious, suspicious));
            prop_assert!(matches!(
                tier,
                RiskTier::Dangerous | RiskTier::Suspicious | RiskTier::Safe
            ));
        }
    }
}
