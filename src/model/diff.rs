//! Field-level differences between two package identifiers.

use super::identifiers::PackageIdentifier;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Prefix for qualifier entries in an [`IdentifierDiff`]
pub const QUALIFIER_PREFIX: &str = "qualifier:";

/// Old and new value of a changed field; `None` means the field was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Changed fields between two identifiers, keyed by field name.
///
/// Keys are `type`, `namespace`, `name`, `version`, `subpath` and
/// `qualifier:<key>`. Only fields whose values differ are present, and keys
/// serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierDiff {
    changes: BTreeMap<String, ValueChange>,
}

impl IdentifierDiff {
    /// Compare `from` against `to`
    pub fn between(from: &PackageIdentifier, to: &PackageIdentifier) -> Self {
        let mut changes = BTreeMap::new();
        let mut record = |field: String, old: Option<&str>, new: Option<&str>| {
            if old != new {
                changes.insert(
                    field,
                    ValueChange {
                        from: old.map(ToString::to_string),
                        to: new.map(ToString::to_string),
                    },
                );
            }
        };

        record("type".to_string(), Some(from.ty()), Some(to.ty()));
        record("namespace".to_string(), from.namespace(), to.namespace());
        record("name".to_string(), Some(from.name()), Some(to.name()));
        record("version".to_string(), from.version(), to.version());
        record("subpath".to_string(), from.subpath(), to.subpath());

        let keys: BTreeSet<&String> = from
            .qualifiers()
            .keys()
            .chain(to.qualifiers().keys())
            .collect();
        for key in keys {
            record(
                format!("{QUALIFIER_PREFIX}{key}"),
                from.qualifier(key),
                to.qualifier(key),
            );
        }

        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// The change recorded for a field, if it changed
    pub fn get(&self, field: &str) -> Option<&ValueChange> {
        self.changes.get(field)
    }

    /// Names of the changed fields, sorted
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    /// Compact JSON object of the changes, or an empty string if nothing changed.
    pub fn to_json_string(&self) -> Result<String> {
        if self.changes.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(&self.changes)?)
    }
}
