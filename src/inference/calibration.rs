//! Calibration of the filename confidence score.
//!
//! The score is a distance from a profile of "ideal" generic identifiers:
//! filenames from release areas where the version is easy to pick out. The
//! built-in profile is computed once per process from
//! [`REFERENCE_IDENTIFIERS`].

use crate::error::{CanonError, Result};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Characters treated as separators when measuring an identifier
pub const SEPARATORS: &[char] = &['.', '-', '_', '#', '%', ':', '/', '\\'];

/// Identifiers the built-in profile is calibrated against
pub const REFERENCE_IDENTIFIERS: [&str; 6] = [
    "pkg:generic/foo-1.2.3.zip",
    "pkg:generic/foo-3.4.5-CR2.zip",
    "pkg:generic/foo-5.6.7.tar.gz",
    "pkg:generic/foo-bar-7.2.4-maven-repository.zip",
    "pkg:generic/quite-long-productname-1.2.3.DR1-maven-repository.zip",
    "pkg:generic/somepro-duct-7.4.11-runtime-maven-repository.zip",
];

static GLOBAL_PROFILE: LazyLock<CalibrationProfile> =
    LazyLock::new(|| CalibrationProfile::compute(&REFERENCE_IDENTIFIERS));

/// Character-class statistics of a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringMetrics {
    /// Length in characters
    pub length: usize,
    pub digit_count: usize,
    pub letter_count: usize,
    pub separator_count: usize,
    /// Number of distinct separator characters used
    pub separator_types: usize,
    /// Longest run of consecutive digits
    pub max_digit_run: usize,
    /// Letters in letter-only segments that follow the first segment containing
    /// a digit (qualifier words such as `Final` trailing a version)
    pub interstitial_letters: usize,
}

impl StringMetrics {
    /// Measure a string
    pub fn measure(s: &str) -> Self {
        let mut metrics = Self::default();
        let mut separator_types = HashSet::new();
        let mut digit_run = 0;

        for c in s.chars() {
            metrics.length += 1;
            if c.is_ascii_digit() {
                metrics.digit_count += 1;
                digit_run += 1;
                continue;
            }

            metrics.max_digit_run = metrics.max_digit_run.max(digit_run);
            digit_run = 0;
            if c.is_alphabetic() {
                metrics.letter_count += 1;
            } else if SEPARATORS.contains(&c) {
                metrics.separator_count += 1;
                separator_types.insert(c);
            }
        }
        metrics.max_digit_run = metrics.max_digit_run.max(digit_run);
        metrics.separator_types = separator_types.len();
        metrics.interstitial_letters = interstitial_letters(s);

        metrics
    }

    /// Strings with no digits, only digits, or only letters carry no signal
    pub fn is_scoreable(&self) -> bool {
        self.digit_count != 0
            && self.digit_count != self.length
            && self.letter_count != self.length
    }

    pub fn digit_ratio(&self) -> f64 {
        self.ratio(self.digit_count)
    }

    pub fn letter_ratio(&self) -> f64 {
        self.ratio(self.letter_count)
    }

    pub fn separator_ratio(&self) -> f64 {
        self.ratio(self.separator_count)
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            count as f64 / self.length as f64
        }
    }
}

fn interstitial_letters(s: &str) -> usize {
    let mut seen_version = false;
    let mut letters = 0;

    for part in s.split(SEPARATORS).filter(|p| !p.is_empty()) {
        if seen_version && part.chars().all(|c| c.is_ascii_alphabetic()) {
            letters += part.len();
        }
        if part.chars().any(|c| c.is_ascii_digit()) {
            seen_version = true;
        }
    }

    letters
}

/// Averaged [`StringMetrics`] over a reference corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationProfile {
    pub ideal_length: f64,
    pub ideal_digit_ratio: f64,
    pub ideal_letter_ratio: f64,
    pub ideal_separator_ratio: f64,
    pub ideal_separator_types: f64,
    pub ideal_max_digit_run: f64,
    pub ideal_interstitial_letters: f64,
}

impl CalibrationProfile {
    /// The process-wide profile built from [`REFERENCE_IDENTIFIERS`].
    ///
    /// Computed on first use; concurrent first callers observe a single
    /// computation.
    pub fn global() -> &'static Self {
        &GLOBAL_PROFILE
    }

    /// Build a profile from a custom reference corpus.
    pub fn from_references<S: AsRef<str>>(references: &[S]) -> Result<Self> {
        if references.is_empty() {
            return Err(CanonError::config(
                "calibration requires at least one reference identifier",
            ));
        }
        Ok(Self::compute(references))
    }

    fn compute<S: AsRef<str>>(references: &[S]) -> Self {
        let mut totals = [0.0_f64; 7];

        for reference in references {
            let m = StringMetrics::measure(reference.as_ref());
            let sample = [
                m.length as f64,
                m.digit_ratio(),
                m.letter_ratio(),
                m.separator_ratio(),
                m.separator_types as f64,
                m.max_digit_run as f64,
                m.interstitial_letters as f64,
            ];
            for (total, value) in totals.iter_mut().zip(sample) {
                *total += value;
            }
        }

        let count = references.len().max(1) as f64;
        let [length, digit, letter, separator, types, run, interstitial] =
            totals.map(|total| total / count);

        Self {
            ideal_length: length,
            ideal_digit_ratio: digit,
            ideal_letter_ratio: letter,
            ideal_separator_ratio: separator,
            ideal_separator_types: types,
            ideal_max_digit_run: run,
            ideal_interstitial_letters: interstitial,
        }
    }
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        *Self::global()
    }
}
