//! Configuration validation for sbom-canon.

use super::types::InferenceConfig;
use crate::inference::ScoringWeights;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for InferenceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.weights.validate();

        if self.reference_identifiers.is_empty() {
            errors.push(ConfigError {
                field: "reference_identifiers".to_string(),
                message: "At least one reference identifier is required".to_string(),
            });
        }

        for (i, reference) in self.reference_identifiers.iter().enumerate() {
            if !reference.chars().any(|c| c.is_ascii_digit()) {
                errors.push(ConfigError {
                    field: format!("reference_identifiers[{i}]"),
                    message: format!("Reference '{reference}' contains no version digits"),
                });
            }
        }

        errors
    }
}

impl Validatable for ScoringWeights {
    fn validate(&self) -> Vec<ConfigError> {
        let named = [
            ("length", self.length),
            ("digit_ratio", self.digit_ratio),
            ("letter_ratio", self.letter_ratio),
            ("separator_ratio", self.separator_ratio),
            ("separator_types", self.separator_types),
            ("max_digit_run", self.max_digit_run),
            ("interstitial_letters", self.interstitial_letters),
        ];

        named
            .into_iter()
            .filter(|(_, weight)| !weight.is_finite() || *weight < 0.0)
            .map(|(name, weight)| ConfigError {
                field: format!("weights.{name}"),
                message: format!("Weight must be a finite, non-negative number, got {weight}"),
            })
            .collect()
    }
}
