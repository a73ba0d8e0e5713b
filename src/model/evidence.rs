//! Identity evidence records.
//!
//! These mirror the `evidence.identity` structure of CycloneDX: a statement
//! that a field's value was *concluded* by one or more analysis methods, each
//! with its own confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The component field an identity statement concludes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum IdentityField {
    Group,
    Name,
    Version,
    Purl,
    Cpe,
    Swid,
    Hash,
}

impl IdentityField {
    /// The spelling used in CycloneDX JSON documents
    #[must_use]
    pub const fn cyclonedx_name(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Name => "name",
            Self::Version => "version",
            Self::Purl => "purl",
            Self::Cpe => "cpe",
            Self::Swid => "swid",
            Self::Hash => "hash",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cyclonedx_name().to_uppercase())
    }
}

/// How an identity value was concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum EvidenceTechnique {
    SourceCodeAnalysis,
    BinaryAnalysis,
    ManifestAnalysis,
    AstFingerprint,
    HashComparison,
    Instrumentation,
    DynamicAnalysis,
    Filename,
    Attestation,
    Other,
}

impl EvidenceTechnique {
    /// The spelling used in CycloneDX JSON documents
    #[must_use]
    pub const fn cyclonedx_name(&self) -> &'static str {
        match self {
            Self::SourceCodeAnalysis => "source-code-analysis",
            Self::BinaryAnalysis => "binary-analysis",
            Self::ManifestAnalysis => "manifest-analysis",
            Self::AstFingerprint => "ast-fingerprint",
            Self::HashComparison => "hash-comparison",
            Self::Instrumentation => "instrumentation",
            Self::DynamicAnalysis => "dynamic-analysis",
            Self::Filename => "filename",
            Self::Attestation => "attestation",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EvidenceTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cyclonedx_name().replace('-', "_").to_uppercase())
    }
}

/// A single method contributing to an identity conclusion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceMethod {
    pub technique: EvidenceTechnique,
    /// Confidence in this method's result (0.0-1.0)
    pub confidence: f64,
    /// Technique-specific detail; for filename inference, the JSON field diff
    pub value: String,
}

/// How a field value was concluded, with an overall confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityEvidence {
    pub field: IdentityField,
    pub concluded_value: String,
    pub methods: Vec<EvidenceMethod>,
    /// Maximum confidence across `methods`
    pub confidence: f64,
}

impl IdentityEvidence {
    /// Create an evidence record; the overall confidence is the best method's.
    pub fn new(
        field: IdentityField,
        concluded_value: impl Into<String>,
        methods: Vec<EvidenceMethod>,
    ) -> Self {
        let confidence = methods
            .iter()
            .map(|m| m.confidence)
            .fold(0.0_f64, f64::max);
        Self {
            field,
            concluded_value: concluded_value.into(),
            methods,
            confidence,
        }
    }
}
