//! Value types produced by password analysis.

use std::fmt;

/// Strength category derived from estimated entropy.
///
/// Ordered from weakest to strongest, so verdicts can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthVerdict {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthVerdict {
    /// Classifies entropy (in bits) into a verdict.
    ///
    /// Buckets are half-open on the upper bound: < 28 Very Weak, < 36 Weak,
    /// < 60 Moderate, < 100 Strong, otherwise Very Strong.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 28.0 {
            StrengthVerdict::VeryWeak
        } else if bits < 36.0 {
            StrengthVerdict::Weak
        } else if bits < 60.0 {
            StrengthVerdict::Moderate
        } else if bits < 100.0 {
            StrengthVerdict::Strong
        } else {
            StrengthVerdict::VeryStrong
        }
    }

    /// Human-readable label, e.g. `"Very Weak"`.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthVerdict::VeryWeak => "Very Weak",
            StrengthVerdict::Weak => "Weak",
            StrengthVerdict::Moderate => "Moderate",
            StrengthVerdict::Strong => "Strong",
            StrengthVerdict::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete result of analyzing one password.
///
/// Built fresh per call and never mutated afterwards. Contains no trace of
/// the password itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Estimated entropy in bits, rounded to two decimals.
    pub entropy: f64,
    /// Formatted crack-time estimate, e.g. `"3.17 years"`.
    pub crack_time: String,
    /// Strength category derived from the entropy.
    pub strength: StrengthVerdict,
    /// Warnings in a fixed order: length first, then plain dictionary
    /// matches, then obfuscated matches.
    pub warnings: Vec<String>,
}
