//! Value types shared by the inference and VCS modules.
//!
//! Both producers in this crate end in the same place: a canonical
//! [`PackageIdentifier`], optionally accompanied by an [`IdentityEvidence`]
//! record explaining how it was derived.

mod diff;
mod evidence;
mod identifiers;

pub use diff::{IdentifierDiff, ValueChange, QUALIFIER_PREFIX};
pub use evidence::{EvidenceMethod, EvidenceTechnique, IdentityEvidence, IdentityField};
pub use identifiers::{PackageIdentifier, PackageIdentifierBuilder, GENERIC_TYPE};
