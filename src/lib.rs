//! **Canonicalization of component identities for Software Bills of Materials.**
//!
//! `sbom-canon` turns loosely specified component references into canonical,
//! comparable identities. It covers two recurring gaps in SBOM generation:
//!
//! - **Generic version inference**: artifacts published outside a package
//!   ecosystem are often known only by a versionless `pkg:generic/...`
//!   identifier whose filename embeds the version (`my-product-1.2.3.zip`).
//!   The [`inference`] module scores how trustworthy such a name is, extracts
//!   the version, and records the conclusion as identity evidence.
//! - **VCS locator normalization**: source repositories are referenced as
//!   `git+https://...`, `https://...#tag` or `git@host:org/repo.git`. The
//!   [`vcs`] module reduces them to one canonical form and projects them onto
//!   package identifiers.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`PackageIdentifier`] (an owned Package URL value), the
//!   identity evidence records and [`IdentifierDiff`].
//! - **[`inference`]**: [`GenericVersionInferencer`], the calibration profile
//!   and scorer, and the ordered version extraction strategies.
//! - **[`vcs`]**: [`VcsUrl`].
//! - **[`config`]**: [`InferenceConfig`] with YAML loading and validation.
//!
//! ## Getting Started: Inferring a Version
//!
//! ```
//! use sbom_canon::GenericVersionInferencer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let inferencer = GenericVersionInferencer::parse("pkg:generic/another-product-5.6.7-CR2.tar.gz")?;
//!
//!     if let Some(result) = inferencer.extract_version() {
//!         println!(
//!             "{} (confidence {:.2})",
//!             result.identifier(),
//!             inferencer.confidence_score()
//!         );
//!     }
//!
//!     let evidence = inferencer.as_identity_evidence()?;
//!     println!("{}", serde_json::to_string_pretty(&evidence)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Normalizing a VCS Locator
//!
//! ```
//! use sbom_canon::VcsUrl;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = VcsUrl::parse("git@github.com:org/repo.git#main")?;
//!     assert_eq!(url.to_string(), "git+ssh://github.com/org/repo.git@main");
//!
//!     let purl = url.to_package_identifier()?;
//!     assert_eq!(purl.namespace(), Some("github.com/org"));
//!     assert_eq!(purl.name(), "repo");
//!     assert_eq!(purl.version(), Some("main"));
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // String metrics are counts converted to f64 ratios; lengths are far below 2^52
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `min`/`mid` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod utils;
pub mod vcs;

// Re-export main types for convenience
pub use config::{ConfigError, InferenceConfig, Validatable};
pub use error::{BuildErrorKind, CanonError, Result, VcsUrlErrorKind};
pub use inference::{
    infer_identity_evidence, infer_versions, CalibrationProfile, GenericVersionInferencer, Scorer,
    ScoringWeights, VersionStrategyKind, VersionedResult,
};
pub use model::{
    EvidenceMethod, EvidenceTechnique, IdentifierDiff, IdentityEvidence, IdentityField,
    PackageIdentifier, PackageIdentifierBuilder, ValueChange,
};
pub use vcs::VcsUrl;
