//! Version inference for versionless generic package identifiers.

use super::scoring::Scorer;
use super::strategy::{find_version, strip_version, VersionStrategyKind};
use crate::config::InferenceConfig;
use crate::error::{CanonError, Result};
use crate::model::{
    EvidenceMethod, EvidenceTechnique, IdentifierDiff, IdentityEvidence, IdentityField,
    PackageIdentifier,
};
use std::str::FromStr;

/// A versionless `generic` identifier together with the confidence that its
/// name yields the right version.
///
/// The confidence score is computed once, at construction, from the
/// identifier's canonical string.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericVersionInferencer {
    identifier: PackageIdentifier,
    confidence_score: f64,
}

/// The identifier with its version pulled out of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedResult {
    identifier: PackageIdentifier,
    strategy: VersionStrategyKind,
}

impl VersionedResult {
    pub fn identifier(&self) -> &PackageIdentifier {
        &self.identifier
    }

    /// The strategy that located the version
    pub fn strategy(&self) -> VersionStrategyKind {
        self.strategy
    }

    pub fn into_identifier(self) -> PackageIdentifier {
        self.identifier
    }
}

impl GenericVersionInferencer {
    /// Wrap an identifier, scoring it against the built-in calibration.
    pub fn new(identifier: PackageIdentifier) -> Result<Self> {
        Self::with_scorer(identifier, &Scorer::default())
    }

    /// Wrap an identifier, scoring it with the given scorer.
    pub fn with_scorer(identifier: PackageIdentifier, scorer: &Scorer) -> Result<Self> {
        if !identifier.is_generic() {
            return Err(CanonError::NotGenericType {
                ty: identifier.ty().to_string(),
            });
        }
        if let Some(version) = identifier.version() {
            return Err(CanonError::AlreadyVersioned {
                version: version.to_string(),
            });
        }

        let canonical = identifier.canonical();
        let confidence_score = scorer.score(&canonical);
        tracing::debug!("Filename confidence for {}: {:.3}", canonical, confidence_score);

        Ok(Self {
            identifier,
            confidence_score,
        })
    }

    /// Wrap an identifier, scoring it with the configured profile and weights.
    pub fn with_config(identifier: PackageIdentifier, config: &InferenceConfig) -> Result<Self> {
        Self::with_scorer(identifier, &config.scorer()?)
    }

    /// Parse a `pkg:` string and wrap it.
    pub fn parse(purl: &str) -> Result<Self> {
        Self::new(PackageIdentifier::parse(purl)?)
    }

    pub fn identifier(&self) -> &PackageIdentifier {
        &self.identifier
    }

    /// Confidence (0.0-1.0) that the extracted version is correct
    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    /// Pull a version out of the identifier's name.
    ///
    /// Returns `None` when no strategy matches; that is an expected outcome
    /// for many filenames, not an error. Namespace, qualifiers and subpath
    /// carry over unchanged.
    pub fn extract_version(&self) -> Option<VersionedResult> {
        let name = self.identifier.name();

        let Some(found) = find_version(name) else {
            tracing::warn!(
                "Unable to extract version from PURL: {}",
                self.identifier.canonical()
            );
            return None;
        };

        let base_name = strip_version(name, found.span);
        let built = self
            .identifier
            .to_builder()
            .name(base_name)
            .version(Some(found.span.to_string()))
            .build();

        match built {
            Ok(identifier) => {
                tracing::debug!(
                    "Extracted version '{}' from {} using {} strategy",
                    found.span,
                    name,
                    found.kind
                );
                Some(VersionedResult {
                    identifier,
                    strategy: found.kind,
                })
            }
            Err(e) => {
                tracing::error!(
                    "Unable to create versioned purl from {}: {e}",
                    self.identifier.canonical()
                );
                None
            }
        }
    }

    /// Field-level differences from the wrapped identifier to `other`
    pub fn diff(&self, other: &PackageIdentifier) -> IdentifierDiff {
        IdentifierDiff::between(&self.identifier, other)
    }

    /// Identity evidence for the extracted version.
    ///
    /// Fails with [`CanonError::NoVersionExtracted`] if no version can be
    /// extracted; check [`extract_version`](Self::extract_version) first when
    /// absence is expected.
    pub fn as_identity_evidence(&self) -> Result<IdentityEvidence> {
        let versioned = self
            .extract_version()
            .ok_or_else(|| CanonError::NoVersionExtracted {
                purl: self.identifier.canonical(),
            })?;

        let method = EvidenceMethod {
            technique: EvidenceTechnique::Filename,
            confidence: self.confidence_score,
            value: self.diff(versioned.identifier()).to_json_string()?,
        };

        Ok(IdentityEvidence::new(
            IdentityField::Purl,
            versioned.identifier().canonical(),
            vec![method],
        ))
    }
}

impl TryFrom<PackageIdentifier> for GenericVersionInferencer {
    type Error = CanonError;

    fn try_from(identifier: PackageIdentifier) -> Result<Self> {
        Self::new(identifier)
    }
}

impl FromStr for GenericVersionInferencer {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
