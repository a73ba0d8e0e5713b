//! Package identifiers (Package URLs).
//!
//! [`PackageIdentifier`] is an owned, immutable view of a Package URL. Parsing,
//! validation and canonical rendering are delegated to the `packageurl` crate;
//! this type adds sorted qualifiers, value semantics and serde support so the
//! rest of the crate can treat identifiers as plain values.

use crate::error::{BuildErrorKind, CanonError, Result};
use packageurl::PackageUrl;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The PURL type with no ecosystem-specific resolution semantics
pub const GENERIC_TYPE: &str = "generic";

/// A typed, namespaced software artifact reference.
///
/// Instances are only produced by [`PackageIdentifier::parse`] or
/// [`PackageIdentifierBuilder::build`], both of which validate the parts, so
/// every value renders to a canonical string. Transformations go through
/// [`PackageIdentifier::to_builder`] and always yield a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageIdentifier {
    ty: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Option<String>,
}

impl PackageIdentifier {
    /// Parse a `pkg:` string
    ///
    /// Strings whose decoded parts would render differently (a name with an
    /// encoded `/`, for example) are rejected.
    pub fn parse(purl: &str) -> Result<Self> {
        let invalid = |source: BuildErrorKind| CanonError::InvalidPurl {
            purl: purl.to_string(),
            source,
        };
        let parsed = PackageUrl::from_str(purl).map_err(|e| invalid(e.into()))?;
        Self::from(&parsed).ensure_reproducible().map_err(invalid)
    }

    /// Start building an identifier of the given type and name
    pub fn builder(ty: impl Into<String>, name: impl Into<String>) -> PackageIdentifierBuilder {
        PackageIdentifierBuilder {
            ty: ty.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// A builder pre-populated with every part of this identifier
    #[must_use]
    pub fn to_builder(&self) -> PackageIdentifierBuilder {
        PackageIdentifierBuilder {
            ty: self.ty.clone(),
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            qualifiers: self.qualifiers.clone(),
            subpath: self.subpath.clone(),
        }
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Qualifiers, sorted by key
    pub fn qualifiers(&self) -> &BTreeMap<String, String> {
        &self.qualifiers
    }

    /// Look up a single qualifier value
    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers.get(key).map(String::as_str)
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    /// Returns true if this is a `generic` type identifier
    pub fn is_generic(&self) -> bool {
        self.ty == GENERIC_TYPE
    }

    /// The canonical `pkg:` string form
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    fn to_package_url(&self) -> std::result::Result<PackageUrl<'_>, packageurl::Error> {
        assemble(
            &self.ty,
            self.namespace.as_deref(),
            &self.name,
            self.version.as_deref(),
            &self.qualifiers,
            self.subpath.as_deref(),
        )
    }

    /// Returns `self` if its canonical string parses back to the same parts.
    fn ensure_reproducible(self) -> std::result::Result<Self, BuildErrorKind> {
        let canonical = self.to_package_url()?.to_string();
        let reparsed = PackageUrl::from_str(&canonical)?;
        if Self::from(&reparsed) == self {
            Ok(self)
        } else {
            Err(BuildErrorKind::NotReproducible { canonical })
        }
    }
}

fn assemble<'a>(
    ty: &'a str,
    namespace: Option<&'a str>,
    name: &'a str,
    version: Option<&'a str>,
    qualifiers: &'a BTreeMap<String, String>,
    subpath: Option<&'a str>,
) -> std::result::Result<PackageUrl<'a>, packageurl::Error> {
    let mut purl = PackageUrl::new(ty, name)?;
    if let Some(namespace) = namespace {
        purl.with_namespace(namespace);
    }
    if let Some(version) = version {
        purl.with_version(version);
    }
    for (key, value) in qualifiers {
        purl.add_qualifier(key.as_str(), value.as_str())?;
    }
    if let Some(subpath) = subpath {
        purl.with_subpath(subpath)?;
    }
    Ok(purl)
}

impl From<&PackageUrl<'_>> for PackageIdentifier {
    fn from(value: &PackageUrl<'_>) -> Self {
        Self {
            ty: value.ty().to_string(),
            namespace: value.namespace().map(ToString::to_string),
            name: value.name().to_string(),
            version: value.version().map(ToString::to_string),
            qualifiers: value
                .qualifiers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            subpath: value.subpath().map(ToString::to_string),
        }
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Parts were validated on construction, so assembly cannot fail here.
        let purl = self.to_package_url().map_err(|_| fmt::Error)?;
        write!(f, "{purl}")
    }
}

impl FromStr for PackageIdentifier {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for PackageIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for PackageIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PackageIdentifierVisitor)
    }
}

struct PackageIdentifierVisitor;

impl<'de> Visitor<'de> for PackageIdentifierVisitor {
    type Value = PackageIdentifier;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a pURL")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        PackageIdentifier::parse(v).map_err(E::custom)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`PackageIdentifier`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PackageIdentifierBuilder {
    ty: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Option<String>,
}

impl PackageIdentifierBuilder {
    #[must_use]
    pub fn namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Add or replace a qualifier
    #[must_use]
    pub fn qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.qualifiers.insert(key.into(), value.into());
        self
    }

    /// Replace all qualifiers
    #[must_use]
    pub fn qualifiers(mut self, qualifiers: BTreeMap<String, String>) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    #[must_use]
    pub fn subpath(mut self, subpath: Option<String>) -> Self {
        self.subpath = subpath;
        self
    }

    /// Validate the parts and produce the identifier.
    ///
    /// Fails when the name is empty, when `packageurl` rejects a part, or when
    /// the parts do not survive a round trip through the canonical string
    /// (a name containing `/` would be read back as a namespace).
    pub fn build(self) -> Result<PackageIdentifier> {
        if self.name.is_empty() {
            return Err(CanonError::build(
                format!("{} identifier", self.ty),
                BuildErrorKind::EmptyName,
            ));
        }

        let purl = assemble(
            &self.ty,
            self.namespace.as_deref(),
            &self.name,
            self.version.as_deref(),
            &self.qualifiers,
            self.subpath.as_deref(),
        )
        .map_err(|e| CanonError::build(format!("{} identifier '{}'", self.ty, self.name), e))?;

        PackageIdentifier::from(&purl)
            .ensure_reproducible()
            .map_err(|e| CanonError::build(format!("{} identifier '{}'", self.ty, self.name), e))
    }
}
