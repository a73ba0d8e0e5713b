//! Unified error types for sbom-canon.
//!
//! Construction-time contract violations (wrong PURL type, an identifier that
//! already carries a version, an unparseable VCS locator) are hard errors.
//! Expected absence, such as a filename with no recognizable version, is
//! modelled as `Option` by the callers and never surfaces here.

use thiserror::Error;

/// Main error type for sbom-canon operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CanonError {
    /// The identifier handed to the version inferencer is not of type `generic`
    #[error("Not a Generic type PURL (found type '{ty}')")]
    NotGenericType { ty: String },

    /// The identifier handed to the version inferencer already has a version
    #[error("PURL already has version defined ({version})")]
    AlreadyVersioned { version: String },

    /// A `pkg:` string could not be parsed
    #[error("Malformed PURL: {purl}")]
    InvalidPurl {
        purl: String,
        #[source]
        source: BuildErrorKind,
    },

    /// A VCS locator could not be parsed into its canonical form
    #[error("Malformed VCS URL '{url}': {reason}")]
    MalformedVcsUrl {
        url: String,
        #[source]
        reason: VcsUrlErrorKind,
    },

    /// Assembling a package identifier from its parts failed
    #[error("Failed to build package identifier: {context}")]
    PackageIdentifierBuild {
        context: String,
        #[source]
        source: BuildErrorKind,
    },

    /// Identity evidence was requested for an identifier with no extractable version
    #[error("Unable to extract version from PURL: {purl}")]
    NoVersionExtracted { purl: String },

    /// JSON serialization of evidence failed
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Reasons a VCS locator is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VcsUrlErrorKind {
    #[error("not a URI or SCP-like locator")]
    Unparseable,

    #[error("host is empty")]
    EmptyHost,

    #[error("vcs tool is empty")]
    EmptyTool,

    #[error("transport is empty")]
    EmptyTransport,

    #[error("revision is empty")]
    EmptyRevision,

    #[error("revision taken from the fragment contains '#'")]
    AmbiguousRevision,

    #[error("path escapes the repository root")]
    PathEscapesRoot,
}

/// Reasons a package identifier cannot be assembled
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BuildErrorKind {
    #[error(transparent)]
    Purl(#[from] packageurl::Error),

    #[error("name is empty")]
    EmptyName,

    #[error("locator has no repository path")]
    MissingPath,

    #[error("canonical form '{canonical}' does not parse back to the same identifier")]
    NotReproducible { canonical: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-canon operations
pub type Result<T> = std::result::Result<T, CanonError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CanonError {
    /// Create a malformed VCS URL error
    pub fn malformed_vcs_url(url: impl Into<String>, reason: VcsUrlErrorKind) -> Self {
        Self::MalformedVcsUrl {
            url: url.into(),
            reason,
        }
    }

    /// Create a package identifier build error with context
    pub fn build(context: impl Into<String>, source: impl Into<BuildErrorKind>) -> Self {
        Self::PackageIdentifierBuild {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns the VCS reason if this is a malformed locator error
    #[must_use]
    pub fn vcs_reason(&self) -> Option<&VcsUrlErrorKind> {
        match self {
            Self::MalformedVcsUrl { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = CanonError::NotGenericType {
            ty: "maven".to_string(),
        };
        assert!(err.to_string().starts_with("Not a Generic type PURL"));

        let err = CanonError::AlreadyVersioned {
            version: "1.2.3".to_string(),
        };
        assert!(err.to_string().contains("already has version defined"));
    }

    #[test]
    fn test_malformed_vcs_url_keeps_reason() {
        let err = CanonError::malformed_vcs_url("git+ssh:///repo", VcsUrlErrorKind::EmptyHost);
        let display = err.to_string();
        assert!(display.contains("git+ssh:///repo"), "{display}");
        assert!(display.contains("host is empty"), "{display}");
        assert_eq!(err.vcs_reason(), Some(&VcsUrlErrorKind::EmptyHost));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_build_error_chain() {
        let err = CanonError::build("from VCS URL", BuildErrorKind::EmptyName);
        assert!(err.to_string().contains("from VCS URL"));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("name is empty"));
        assert!(err.vcs_reason().is_none());
    }

    #[test]
    fn test_not_reproducible_names_the_canonical_form() {
        let err = CanonError::build(
            "generic identifier 'a/b'",
            BuildErrorKind::NotReproducible {
                canonical: "pkg:generic/a/b".to_string(),
            },
        );
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(source.contains("pkg:generic/a/b"), "{source}");
    }
}
