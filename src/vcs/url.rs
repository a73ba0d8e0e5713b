//! Canonical VCS locators.
//!
//! Source repositories are referenced in many shapes: `git+https://host/repo`,
//! `https://host/repo#tag`, `git@host:org/repo.git` and so on. [`VcsUrl`]
//! reduces all of them to one canonical form:
//!
//! ```text
//! <tool>+<transport>://<host>[/<path>][@<revision>][#<subpath>]
//! ```

use super::locator::RawLocator;
use crate::error::{BuildErrorKind, CanonError, Result, VcsUrlErrorKind};
use crate::model::{PackageIdentifier, GENERIC_TYPE};
use crate::utils::{join_path, normalize_path};
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Tool assumed when the scheme does not name one
pub const DEFAULT_TOOL: &str = "git";

/// Transport assumed for SCP-like locators
pub const DEFAULT_TRANSPORT: &str = "ssh";

/// Qualifier carrying the canonical locator on projected identifiers
pub const VCS_URL_QUALIFIER: &str = "vcs_url";

const TOOL_DELIMITER: char = '+';
const REVISION_DELIMITER: char = '@';
const SUBPATH_DELIMITER: char = '#';
const GIT_SUFFIX: &str = ".git";

/// A parsed VCS locator in canonical form.
///
/// The path is normalized and carries no leading `/`. Revision and subpath
/// are never empty when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VcsUrl {
    tool: String,
    transport: String,
    host: String,
    path: Option<String>,
    revision: Option<String>,
    subpath: Option<String>,
}

impl VcsUrl {
    /// Parse a URI or SCP-like locator.
    ///
    /// A `#fragment` becomes the subpath when the scheme names a tool
    /// explicitly (`git+https://`) or a revision was given with `@`;
    /// otherwise it is read as the revision.
    pub fn parse(url: &str) -> Result<Self> {
        let malformed = |reason| CanonError::malformed_vcs_url(url, reason);

        let raw = RawLocator::tokenize(url).ok_or_else(|| malformed(VcsUrlErrorKind::Unparseable))?;
        if raw.host.is_empty() {
            return Err(malformed(VcsUrlErrorKind::EmptyHost));
        }

        let (tool, transport, explicit) = match raw.scheme {
            Some(scheme) => match scheme.split_once(TOOL_DELIMITER) {
                Some(("", _)) => return Err(malformed(VcsUrlErrorKind::EmptyTool)),
                Some((_, "")) => return Err(malformed(VcsUrlErrorKind::EmptyTransport)),
                Some((tool, transport)) => (tool, transport, true),
                None => (DEFAULT_TOOL, scheme, false),
            },
            None => (DEFAULT_TOOL, DEFAULT_TRANSPORT, false),
        };

        let mut vcs_url = Self {
            tool: tool.to_string(),
            transport: transport.to_string(),
            host: raw.host,
            path: None,
            revision: None,
            subpath: None,
        };

        let Some(raw_path) = raw.path else {
            return Ok(vcs_url);
        };

        let normalized =
            normalize_path(raw_path).ok_or_else(|| malformed(VcsUrlErrorKind::PathEscapesRoot))?;
        let mut normalized = normalized
            .strip_prefix('/')
            .map_or_else(|| normalized.clone(), ToString::to_string);

        // A lone trailing '#' carries nothing; drop it and let the
        // segments it was glued to normalize like the rest
        if normalized
            .split_once(SUBPATH_DELIMITER)
            .is_some_and(|(_, fragment)| fragment.is_empty())
        {
            normalized.pop();
            normalized = normalize_path(&normalized)
                .ok_or_else(|| malformed(VcsUrlErrorKind::PathEscapesRoot))?;
        }

        let (mut path, fragment) = match normalized.split_once(SUBPATH_DELIMITER) {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (normalized.as_str(), None),
        };

        if let Some((before, revision)) = path.split_once(REVISION_DELIMITER) {
            vcs_url.revision = Some(revision.to_string());
            path = before;
        }

        if explicit || vcs_url.revision.is_some() {
            vcs_url.subpath = fragment.map(ToString::to_string);
        } else if let Some(revision) = fragment {
            if revision.contains(SUBPATH_DELIMITER) {
                return Err(malformed(VcsUrlErrorKind::AmbiguousRevision));
            }
            vcs_url.revision = Some(revision.to_string());
        }

        if vcs_url
            .revision
            .as_deref()
            .is_some_and(|revision| revision.trim_matches('/').is_empty())
        {
            return Err(malformed(VcsUrlErrorKind::EmptyRevision));
        }

        // Dot segments glued to a fragment or revision survive the first pass
        let path = normalize_path(path).ok_or_else(|| malformed(VcsUrlErrorKind::PathEscapesRoot))?;
        vcs_url.path = Some(path);

        Ok(vcs_url)
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn transport(&self) -> &str {
        &self.transport
    }

    /// Host, including `:port` when one was given
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Repository path relative to the host
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    /// A plain transport URL, e.g. for cloning.
    ///
    /// The fragment carries the subpath, or the revision when there is no
    /// subpath.
    #[must_use]
    pub fn to_transport_url(&self) -> String {
        let mut url = format!("{}://{}", self.transport, self.host);
        if let Some(path) = &self.path {
            url.push('/');
            url.push_str(path);
        }
        if let Some(fragment) = self.subpath.as_ref().or(self.revision.as_ref()) {
            url.push(SUBPATH_DELIMITER);
            url.push_str(fragment);
        }
        url
    }

    /// Project onto a `generic` package identifier, versioned with the
    /// locator's own revision.
    pub fn to_package_identifier(&self) -> Result<PackageIdentifier> {
        self.project(self.revision.clone())
    }

    /// Project onto a `generic` package identifier, versioned with `revision`.
    pub fn to_package_identifier_at(&self, revision: &str) -> Result<PackageIdentifier> {
        self.project(Some(revision.to_string()))
    }

    fn project(&self, version: Option<String>) -> Result<PackageIdentifier> {
        let context = || format!("from VCS URL '{self}'");

        let path = self
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CanonError::build(context(), BuildErrorKind::MissingPath))?;

        let (namespace, name) = match path.rsplit_once('/') {
            Some((parent, name)) if !parent.is_empty() => {
                let namespace = join_path(&self.host, parent)
                    .unwrap_or_else(|| format!("{}/{parent}", self.host));
                (namespace, name)
            }
            Some((_, name)) => (self.host.clone(), name),
            None => (self.host.clone(), path),
        };
        let name = name.strip_suffix(GIT_SUFFIX).unwrap_or(name);

        PackageIdentifier::builder(GENERIC_TYPE, name)
            .namespace(Some(namespace))
            .version(version)
            .qualifier(VCS_URL_QUALIFIER, self.to_string())
            .subpath(self.subpath.clone())
            .build()
            .map_err(|e| match e {
                CanonError::PackageIdentifierBuild { source, .. } => {
                    CanonError::build(context(), source)
                }
                other => other,
            })
    }
}

impl fmt::Display for VcsUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{TOOL_DELIMITER}{}://{}",
            self.tool, self.transport, self.host
        )?;
        if let Some(path) = &self.path {
            write!(f, "/{path}")?;
        }
        if let Some(revision) = &self.revision {
            write!(f, "{REVISION_DELIMITER}{revision}")?;
        }
        if let Some(subpath) = &self.subpath {
            write!(f, "{SUBPATH_DELIMITER}{subpath}")?;
        }
        Ok(())
    }
}

impl FromStr for VcsUrl {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for VcsUrl {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VcsUrl {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(VcsUrlVisitor)
    }
}

struct VcsUrlVisitor;

impl<'de> Visitor<'de> for VcsUrlVisitor {
    type Value = VcsUrl;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a VCS URL")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        VcsUrl::parse(v).map_err(E::custom)
    }
}
