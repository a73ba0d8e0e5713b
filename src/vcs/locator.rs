//! Lexical split of a locator into scheme, host and path.
//!
//! Two shapes are recognized: a full URI (`scheme://[user@]host[:port][/path]`)
//! and the SCP-like shorthand used by Git (`[user@]host:path`). User
//! information is discarded. The authority of either shape goes through
//! [`url::Url`], so both agree on what a valid host is; the path is kept
//! verbatim for the VCS-specific split of revision and subpath.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<scheme>[A-Za-z0-9+.\-]+)://").expect("static regex"));

static SCP_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<user>[^/@#:]+)@)?(?P<host>\[[^\]/@#]*\]|[^/@#:\[\]]+):(?P<path>.+)$")
        .expect("static regex")
});

/// Scheme handed to the URL parser: non-special, so hosts are kept opaque.
const AUTHORITY_SCHEME: &str = "vcs";

/// The raw parts of a locator, before any VCS-specific interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawLocator<'a> {
    /// `None` for the SCP-like form
    pub scheme: Option<&'a str>,
    /// Host, with `:port` appended when a port was given
    pub host: String,
    /// Everything after the authority, including any `@` or `#` parts
    pub path: Option<&'a str>,
}

impl<'a> RawLocator<'a> {
    /// Split `input`, or `None` if it is neither a URI nor an SCP-like locator.
    pub fn tokenize(input: &'a str) -> Option<Self> {
        if let Some(captures) = SCHEME.captures(input) {
            let scheme = captures.name("scheme")?.as_str();
            let rest = &input[captures.get(0)?.end()..];
            let (authority, path) = match rest.find(['/', '?', '#']) {
                Some(at) => (&rest[..at], Some(&rest[at..])),
                None => (rest, None),
            };
            return Some(Self {
                scheme: Some(scheme),
                host: parse_authority(authority)?,
                path,
            });
        }

        if input.contains("://") {
            return None;
        }

        let captures = SCP_LIKE.captures(input)?;
        let host = parse_authority(captures.name("host")?.as_str())?;
        if host.is_empty() {
            return None;
        }
        Some(Self {
            scheme: None,
            host,
            path: captures.name("path").map(|m| m.as_str()),
        })
    }
}

/// Reduce `[user@]host[:port]` to `host[:port]`.
///
/// Returns an empty host when the authority names none, and `None` when the
/// authority is not valid.
fn parse_authority(authority: &str) -> Option<String> {
    let host_part = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host_part.is_empty() {
        return Some(String::new());
    }

    let parsed = match Url::parse(&format!("{AUTHORITY_SCHEME}://{authority}")) {
        Ok(parsed) => parsed,
        Err(url::ParseError::EmptyHost) => return Some(String::new()),
        Err(e) => {
            tracing::trace!("Rejected authority '{}': {}", authority, e);
            return None;
        }
    };
    if !parsed.path().is_empty() || parsed.query().is_some() || parsed.fragment().is_some() {
        return None;
    }

    let host = parsed.host_str().unwrap_or_default();
    Some(match parsed.port() {
        Some(port) if !host.is_empty() => format!("{host}:{port}"),
        _ => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_uri() {
        let raw = RawLocator::tokenize("git+ssh://git@github.com/user/repo.git#ref").unwrap();
        assert_eq!(raw.scheme, Some("git+ssh"));
        assert_eq!(raw.host, "github.com");
        assert_eq!(raw.path, Some("/user/repo.git#ref"));
    }

    #[test]
    fn test_full_uri_with_port() {
        let raw = RawLocator::tokenize("ssh://git@example.com:2222/repo.git").unwrap();
        assert_eq!(raw.host, "example.com:2222");
        assert_eq!(raw.path, Some("/repo.git"));
    }

    #[test]
    fn test_full_uri_with_ipv6_host() {
        let raw = RawLocator::tokenize("ssh://git@[::1]:2222/org/repo.git").unwrap();
        assert_eq!(raw.scheme, Some("ssh"));
        assert_eq!(raw.host, "[::1]:2222");
        assert_eq!(raw.path, Some("/org/repo.git"));

        let raw = RawLocator::tokenize("https://[2001:db8::1]/repo").unwrap();
        assert_eq!(raw.host, "[2001:db8::1]");
    }

    #[test]
    fn test_full_uri_without_path() {
        let raw = RawLocator::tokenize("https://example.com").unwrap();
        assert_eq!(raw.host, "example.com");
        assert_eq!(raw.path, None);
    }

    #[test]
    fn test_query_starts_the_path() {
        let raw = RawLocator::tokenize("https://example.com?x=1").unwrap();
        assert_eq!(raw.host, "example.com");
        assert_eq!(raw.path, Some("?x=1"));
    }

    #[test]
    fn test_at_sign_in_path_is_not_userinfo() {
        let raw = RawLocator::tokenize("git+https://github.com/org/repo.git@v1.0").unwrap();
        assert_eq!(raw.host, "github.com");
        assert_eq!(raw.path, Some("/org/repo.git@v1.0"));
    }

    #[test]
    fn test_scp_like() {
        let raw = RawLocator::tokenize("git@github.com:org/repo.git").unwrap();
        assert_eq!(raw.scheme, None);
        assert_eq!(raw.host, "github.com");
        assert_eq!(raw.path, Some("org/repo.git"));

        let raw = RawLocator::tokenize("example.com:repo.git").unwrap();
        assert_eq!(raw.host, "example.com");

        let raw = RawLocator::tokenize("git@[::1]:org/repo.git").unwrap();
        assert_eq!(raw.host, "[::1]");
        assert_eq!(raw.path, Some("org/repo.git"));
    }

    #[test]
    fn test_empty_host() {
        let raw = RawLocator::tokenize("git+ssh:///repo.git").unwrap();
        assert_eq!(raw.host, "");

        let raw = RawLocator::tokenize("ssh://git@/repo.git").unwrap();
        assert_eq!(raw.host, "");
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(RawLocator::tokenize("/srv/git/repo.git"), None);
        assert_eq!(RawLocator::tokenize("just-a-word"), None);
        assert_eq!(RawLocator::tokenize("https://host:notaport/x"), None);
        assert_eq!(RawLocator::tokenize("https://host:99999/x"), None);
        assert_eq!(RawLocator::tokenize("ssh://bad host/x"), None);
        assert_eq!(RawLocator::tokenize("bad host:repo.git"), None);
        assert_eq!(RawLocator::tokenize(""), None);
    }
}
