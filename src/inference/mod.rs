//! Version inference for generic package identifiers.
//!
//! Artifacts published outside a package ecosystem are usually described by a
//! `pkg:generic/...` identifier whose only version information is buried in the
//! filename. This module scores how reliably a version can be read from such a
//! name, extracts it, and records how the conclusion was reached:
//!
//! ```
//! use sbom_canon::inference::GenericVersionInferencer;
//!
//! let inferencer = GenericVersionInferencer::parse("pkg:generic/my-product-1.2.3.zip")?;
//! let versioned = inferencer.extract_version().expect("version present");
//! assert_eq!(versioned.identifier().name(), "my-product.zip");
//! assert_eq!(versioned.identifier().version(), Some("1.2.3"));
//!
//! let evidence = inferencer.as_identity_evidence()?;
//! assert_eq!(evidence.confidence, inferencer.confidence_score());
//! # Ok::<(), sbom_canon::CanonError>(())
//! ```

mod calibration;
mod inferencer;
mod scoring;
mod strategy;

pub use calibration::{CalibrationProfile, StringMetrics, REFERENCE_IDENTIFIERS, SEPARATORS};
pub use inferencer::{GenericVersionInferencer, VersionedResult};
pub use scoring::{score, score_with, Scorer, ScoringWeights};
pub use strategy::{
    find_version, strip_version, version_strategies, VersionMatch, VersionStrategy,
    VersionStrategyKind,
};

use crate::error::{CanonError, Result};
use crate::model::{IdentityEvidence, PackageIdentifier};
use rayon::prelude::*;

/// Extract versions from many identifiers in parallel.
///
/// Results are returned in input order, one per input. `Ok(None)` means the
/// identifier was accepted but no strategy matched its name.
pub fn infer_versions<S>(purls: &[S]) -> Vec<Result<Option<VersionedResult>>>
where
    S: AsRef<str> + Sync,
{
    purls
        .par_iter()
        .map(|purl| -> Result<Option<VersionedResult>> {
            Ok(GenericVersionInferencer::parse(purl.as_ref())?.extract_version())
        })
        .collect()
}

/// Infer identity evidence for many identifiers in parallel.
///
/// Results are returned in input order. `Ok(None)` means the identifier was
/// accepted but no version could be extracted from its name.
pub fn infer_identity_evidence<S>(
    purls: &[S],
    scorer: &Scorer,
) -> Vec<Result<Option<IdentityEvidence>>>
where
    S: AsRef<str> + Sync,
{
    purls
        .par_iter()
        .map(|purl| -> Result<Option<IdentityEvidence>> {
            let identifier = PackageIdentifier::parse(purl.as_ref())?;
            let inferencer = GenericVersionInferencer::with_scorer(identifier, scorer)?;
            match inferencer.as_identity_evidence() {
                Ok(evidence) => Ok(Some(evidence)),
                Err(CanonError::NoVersionExtracted { .. }) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .collect()
}
