//! Integration tests for VCS locator normalization.

use sbom_canon::{BuildErrorKind, CanonError, VcsUrl, VcsUrlErrorKind};

fn parse(url: &str) -> VcsUrl {
    VcsUrl::parse(url).unwrap_or_else(|e| panic!("{url} should parse: {e}"))
}

// ============================================================================
// Parsing
// ============================================================================

mod parse_tests {
    use super::*;

    #[test]
    fn test_explicit_tool_routes_fragment_to_subpath() {
        let url = parse("git+ssh://git@github.com/user/repo.git#ref");
        assert_eq!(url.tool(), "git");
        assert_eq!(url.transport(), "ssh");
        assert_eq!(url.host(), "github.com");
        assert_eq!(url.path(), Some("user/repo.git"));
        assert_eq!(url.subpath(), Some("ref"));
        assert_eq!(url.revision(), None);
    }

    #[test]
    fn test_plain_scheme_routes_fragment_to_revision() {
        let url = parse("https://github.com/user/repo.git#v1.2.3");
        assert_eq!(url.tool(), "git");
        assert_eq!(url.transport(), "https");
        assert_eq!(url.revision(), Some("v1.2.3"));
        assert_eq!(url.subpath(), None);
    }

    #[test]
    fn test_scp_like_defaults() {
        let url = parse("git@gitlab.com:group/sub/project.git");
        assert_eq!(url.tool(), "git");
        assert_eq!(url.transport(), "ssh");
        assert_eq!(url.host(), "gitlab.com");
        assert_eq!(url.path(), Some("group/sub/project.git"));
    }

    #[test]
    fn test_explicit_revision_then_fragment() {
        let url = parse("git+https://github.com/org/repo.git@refs/tags/v1#docs");
        assert_eq!(url.revision(), Some("refs/tags/v1"));
        assert_eq!(url.subpath(), Some("docs"));
    }

    #[test]
    fn test_other_tools() {
        let url = parse("hg+https://hg.example.org/project@tip");
        assert_eq!(url.tool(), "hg");
        assert_eq!(url.transport(), "https");
        assert_eq!(url.revision(), Some("tip"));
    }

    #[test]
    fn test_empty_host_fails() {
        let err = VcsUrl::parse("git+ssh:///user/repo.git").unwrap_err();
        assert!(matches!(err, CanonError::MalformedVcsUrl { .. }));
        assert_eq!(err.vcs_reason(), Some(&VcsUrlErrorKind::EmptyHost));
    }

    #[test]
    fn test_unparseable_fails() {
        for input in ["", "repo.git", "/local/path/repo.git"] {
            let err = VcsUrl::parse(input).unwrap_err();
            assert_eq!(err.vcs_reason(), Some(&VcsUrlErrorKind::Unparseable), "{input:?}");
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let cases = [
            (
                "git+ssh://git@github.com/user/repo.git#ref",
                "git+ssh://github.com/user/repo.git#ref",
            ),
            (
                "git@github.com:org/repo.git#main",
                "git+ssh://github.com/org/repo.git@main",
            ),
            (
                "https://github.com//org/./repo.git/",
                "git+https://github.com/org/repo.git",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).to_string(), expected, "{input}");
        }
    }

    #[test]
    fn test_reparse_is_idempotent() {
        for input in [
            "git+ssh://git@github.com/user/repo.git#ref",
            "git@github.com:org/repo.git#main",
            "https://github.com/org/repo.git@abc123#sub/dir",
            "ssh://git@example.com:2222/repo.git",
            "git+https://example.com",
            "ssh://git@[::1]:2222/org/repo.git",
            "git@github.com:org/repo.git#a#b",
            "A:##",
            "ssh://a/.@/#",
        ] {
            // Inputs that are rejected have nothing to render
            let Ok(url) = VcsUrl::parse(input) else {
                continue;
            };
            assert_eq!(parse(&url.to_string()), url, "{input}");
        }
    }

    #[test]
    fn test_unrenderable_fragments_are_rejected() {
        for input in ["git@github.com:org/repo.git#a#b", "A:##", "ssh://a/.@/#"] {
            assert!(VcsUrl::parse(input).is_err(), "{input}");
        }
    }

    #[test]
    fn test_transport_url() {
        let url = parse("git+https://github.com/org/repo.git@v1#docs");
        assert_eq!(url.to_transport_url(), "https://github.com/org/repo.git#docs");

        let url = parse("git+https://github.com/org/repo.git@v1");
        assert_eq!(url.to_transport_url(), "https://github.com/org/repo.git#v1");
    }
}

// ============================================================================
// Projection onto package identifiers
// ============================================================================

mod projection_tests {
    use super::*;

    #[test]
    fn test_namespace_and_name() {
        let purl = parse("git+ssh://git@github.com/user/repo.git#ref")
            .to_package_identifier()
            .unwrap();
        assert!(purl.is_generic());
        assert_eq!(purl.namespace(), Some("github.com/user"));
        assert_eq!(purl.name(), "repo");
        assert_eq!(purl.subpath(), Some("ref"));
    }

    #[test]
    fn test_nested_groups() {
        let purl = parse("git@gitlab.com:group/sub/project.git")
            .to_package_identifier()
            .unwrap();
        assert_eq!(purl.namespace(), Some("gitlab.com/group/sub"));
        assert_eq!(purl.name(), "project");
    }

    #[test]
    fn test_revision_override() {
        let url = parse("https://github.com/org/repo.git#main");
        assert_eq!(url.to_package_identifier().unwrap().version(), Some("main"));
        assert_eq!(
            url.to_package_identifier_at("4.1.0").unwrap().version(),
            Some("4.1.0")
        );
    }

    #[test]
    fn test_vcs_url_qualifier() {
        let url = parse("git@github.com:org/repo.git#main");
        let purl = url.to_package_identifier().unwrap();
        assert_eq!(
            purl.qualifier("vcs_url"),
            Some("git+ssh://github.com/org/repo.git@main")
        );
    }

    #[test]
    fn test_missing_path_fails() {
        let err = parse("git+https://example.com").to_package_identifier().unwrap_err();
        assert!(matches!(
            err,
            CanonError::PackageIdentifierBuild {
                source: BuildErrorKind::MissingPath,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_name_after_suffix_strip_fails() {
        let err = parse("git@github.com:org/.git").to_package_identifier().unwrap_err();
        assert!(matches!(err, CanonError::PackageIdentifierBuild { .. }));
    }
}
