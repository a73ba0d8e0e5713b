//! Ordered filename version extraction strategies.
//!
//! The patterns cover the naming conventions seen on product release areas:
//! `name-1.2.3.zip`, `name-1.2.3-CR2.zip`, `name-1.2.3.Final.zip`,
//! `name-8.9-dist` and `name_10_11_final`. Strategies are tried in order and
//! the first match wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Which strategy located the version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionStrategyKind {
    /// `major.minor.patch`
    MajorMinorPatch,
    /// `major.minor`
    MajorMinor,
    /// `major_minor`
    UnderscoreMajorMinor,
}

impl fmt::Display for VersionStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MajorMinorPatch => write!(f, "major.minor.patch"),
            Self::MajorMinor => write!(f, "major.minor"),
            Self::UnderscoreMajorMinor => write!(f, "major_minor"),
        }
    }
}

/// Optional qualifier after the numeric core, e.g. `.Final` or `-CR2`
const QUALIFIER_SUFFIX: &str = r"(?P<qualsep>[.-](?P<qualifier>Final|[A-Z]+[0-9]*))?";

static STRATEGIES: LazyLock<Vec<VersionStrategy>> = LazyLock::new(|| {
    vec![
        VersionStrategy::new(VersionStrategyKind::MajorMinorPatch, r"[0-9]+\.[0-9]+\.[0-9]+"),
        VersionStrategy::new(VersionStrategyKind::MajorMinor, r"[0-9]+\.[0-9]+"),
        VersionStrategy::new(VersionStrategyKind::UnderscoreMajorMinor, r"[0-9]+_[0-9]+"),
    ]
});

/// A single extraction strategy: a kind and its compiled pattern.
#[derive(Debug, Clone)]
pub struct VersionStrategy {
    kind: VersionStrategyKind,
    pattern: Regex,
}

/// A version located in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMatch<'a> {
    pub kind: VersionStrategyKind,
    /// Whole matched span, numeric core plus qualifier
    pub span: &'a str,
    /// The numeric core
    pub core: &'a str,
    /// The qualifier token without its separator
    pub qualifier: Option<&'a str>,
}

impl VersionStrategy {
    fn new(kind: VersionStrategyKind, core: &str) -> Self {
        let pattern = Regex::new(&format!("(?P<version>{core}){QUALIFIER_SUFFIX}"))
            .expect("static regex");
        Self { kind, pattern }
    }

    pub fn kind(&self) -> VersionStrategyKind {
        self.kind
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Find the leftmost version this strategy recognizes in `name`
    pub fn find<'a>(&self, name: &'a str) -> Option<VersionMatch<'a>> {
        let captures = self.pattern.captures(name)?;
        let span = captures.get(0)?.as_str();
        let core = captures.name("version")?.as_str();
        let qualifier = captures.name("qualifier").map(|m| m.as_str());

        Some(VersionMatch {
            kind: self.kind,
            span,
            core,
            qualifier,
        })
    }
}

/// The strategies, in evaluation order
pub fn version_strategies() -> &'static [VersionStrategy] {
    &STRATEGIES
}

/// Apply the strategies in order; the first match wins.
pub fn find_version(name: &str) -> Option<VersionMatch<'_>> {
    version_strategies().iter().find_map(|s| s.find(name))
}

/// Remove `span` from `name` and tidy the separators left behind.
pub fn strip_version(name: &str, span: &str) -> String {
    let cleaned = name
        .replace(span, "")
        .replace("--", "-")
        .replace("..", ".")
        .replace("-.", ".")
        .replace("__", "_");

    let cleaned = cleaned.strip_prefix('-').unwrap_or(&cleaned);
    let cleaned = cleaned.strip_suffix('-').unwrap_or(cleaned);
    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_order() {
        let kinds: Vec<_> = version_strategies().iter().map(VersionStrategy::kind).collect();
        assert_eq!(
            kinds,
            vec![
                VersionStrategyKind::MajorMinorPatch,
                VersionStrategyKind::MajorMinor,
                VersionStrategyKind::UnderscoreMajorMinor,
            ]
        );
    }

    #[test]
    fn test_major_minor_patch_with_qualifier() {
        let strategy = &version_strategies()[0];
        let m = strategy.find("another-product-5.6.7-CR2.tar.gz").unwrap();
        assert_eq!(m.span, "5.6.7-CR2");
        assert_eq!(m.core, "5.6.7");
        assert_eq!(m.qualifier, Some("CR2"));

        let m = strategy.find("foo-runner-1.13.7.Final.zip").unwrap();
        assert_eq!(m.span, "1.13.7.Final");
        assert_eq!(m.qualifier, Some("Final"));

        assert!(strategy.find("lib-name-8.9-final-dist").is_none());
    }

    #[test]
    fn test_major_minor_ignores_lowercase_qualifier() {
        let strategy = &version_strategies()[1];
        let m = strategy.find("lib-name-8.9-final-dist").unwrap();
        assert_eq!(m.span, "8.9");
        assert_eq!(m.qualifier, None);
    }

    #[test]
    fn test_major_minor_takes_whole_final() {
        let m = version_strategies()[1].find("tool-2.4.Final.zip").unwrap();
        assert_eq!(m.span, "2.4.Final");
    }

    #[test]
    fn test_underscore() {
        let strategy = &version_strategies()[2];
        let m = strategy.find("archive_10_11_final").unwrap();
        assert_eq!(m.span, "10_11");
        assert!(strategy.find("archive-10.11").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let m = find_version("pkg-1.2.3-and-4.5").unwrap();
        assert_eq!(m.kind, VersionStrategyKind::MajorMinorPatch);
        assert_eq!(m.span, "1.2.3");

        let m = find_version("pkg-4.5-and-1_2").unwrap();
        assert_eq!(m.kind, VersionStrategyKind::MajorMinor);

        assert!(find_version("product-without-version").is_none());
    }

    #[test]
    fn test_strip_version() {
        assert_eq!(strip_version("my-product-1.2.3.zip", "1.2.3"), "my-product.zip");
        assert_eq!(
            strip_version("another-product-5.6.7-CR2.tar.gz", "5.6.7-CR2"),
            "another-product.tar.gz"
        );
        assert_eq!(
            strip_version("lib-name-8.9-final-dist", "8.9"),
            "lib-name-final-dist"
        );
        assert_eq!(strip_version("archive_10_11_final", "10_11"), "archive_final");
        assert_eq!(strip_version("1.0-tool-", "1.0"), "tool");
    }
}
