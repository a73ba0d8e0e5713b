//! Confidence scoring for filename-based version inference.

use super::calibration::{CalibrationProfile, StringMetrics};
use serde::{Deserialize, Serialize};

/// Penalty weights applied to each metric's deviation from the profile.
///
/// The defaults are empirically tuned; changing them shifts every score
/// already recorded in evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub length: f64,
    pub digit_ratio: f64,
    pub letter_ratio: f64,
    pub separator_ratio: f64,
    pub separator_types: f64,
    pub max_digit_run: f64,
    pub interstitial_letters: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 0.005,
            digit_ratio: 5.0,
            letter_ratio: 1.5,
            separator_ratio: 4.0,
            separator_types: 0.1,
            max_digit_run: 0.2,
            interstitial_letters: 0.02,
        }
    }
}

impl ScoringWeights {
    /// Weights as an array, in declaration order
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.length,
            self.digit_ratio,
            self.letter_ratio,
            self.separator_ratio,
            self.separator_types,
            self.max_digit_run,
            self.interstitial_letters,
        ]
    }
}

/// A calibration profile paired with penalty weights.
///
/// The default scorer uses the process-wide profile and the tuned weights;
/// construct one explicitly to inject a different calibration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scorer {
    profile: CalibrationProfile,
    weights: ScoringWeights,
}

impl Scorer {
    #[must_use]
    pub const fn new(profile: CalibrationProfile, weights: ScoringWeights) -> Self {
        Self { profile, weights }
    }

    pub fn profile(&self) -> &CalibrationProfile {
        &self.profile
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Confidence (0.0-1.0) that a version can be correctly extracted from `s`.
    ///
    /// Strings with no digits, only digits or only letters score 0.0.
    pub fn score(&self, s: &str) -> f64 {
        let metrics = StringMetrics::measure(s);
        if !metrics.is_scoreable() {
            return 0.0;
        }

        let p = &self.profile;
        let deviations = [
            (metrics.length as f64 - p.ideal_length).abs(),
            (metrics.digit_ratio() - p.ideal_digit_ratio).abs(),
            (metrics.letter_ratio() - p.ideal_letter_ratio).abs(),
            (metrics.separator_ratio() - p.ideal_separator_ratio).abs(),
            (metrics.separator_types as f64 - p.ideal_separator_types).abs(),
            (metrics.max_digit_run as f64 - p.ideal_max_digit_run).abs(),
            (metrics.interstitial_letters as f64 - p.ideal_interstitial_letters).abs(),
        ];

        let penalty: f64 = deviations
            .iter()
            .zip(self.weights.as_array())
            .map(|(deviation, weight)| deviation * weight)
            .sum();

        (1.0 - penalty).clamp(0.0, 1.0)
    }
}

/// Score `s` against the built-in calibration
pub fn score(s: &str) -> f64 {
    Scorer::default().score(s)
}

/// Score `s` against an explicit profile and weights
pub fn score_with(s: &str, profile: &CalibrationProfile, weights: &ScoringWeights) -> f64 {
    Scorer::new(*profile, *weights).score(s)
}
