//! Configuration types for sbom-canon.

use super::validation::Validatable;
use crate::error::{CanonError, Result};
use crate::inference::{CalibrationProfile, Scorer, ScoringWeights, REFERENCE_IDENTIFIERS};
use serde::{Deserialize, Serialize};

/// Settings for filename-based version inference.
///
/// Holds the penalty weights and the reference corpus the calibration
/// profile is derived from. Missing fields fall back to the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Penalty weights applied by the scorer
    pub weights: ScoringWeights,
    /// Identifiers that define an ideal, well-formed name
    pub reference_identifiers: Vec<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            reference_identifiers: REFERENCE_IDENTIFIERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl InferenceConfig {
    #[must_use]
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_reference_identifiers<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reference_identifiers = references.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the corpus is the built-in one
    pub fn uses_builtin_references(&self) -> bool {
        self.reference_identifiers
            .iter()
            .map(String::as_str)
            .eq(REFERENCE_IDENTIFIERS)
    }

    /// Validate and build the scorer this configuration describes.
    ///
    /// The built-in corpus reuses the process-wide profile instead of
    /// recomputing it.
    pub fn scorer(&self) -> Result<Scorer> {
        let errors = self.validate();
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CanonError::config(message));
        }

        let profile = if self.uses_builtin_references() {
            *CalibrationProfile::global()
        } else {
            CalibrationProfile::from_references(self.reference_identifiers.as_slice())?
        };
        Ok(Scorer::new(profile, self.weights))
    }
}
