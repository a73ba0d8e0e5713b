#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz VCS locator parsing.
///
/// Any locator that parses must render to a string that parses back to
/// the same value.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(url) = sbom_canon::VcsUrl::parse(s) {
            let rendered = url.to_string();
            let reparsed = sbom_canon::VcsUrl::parse(&rendered);
            assert_eq!(reparsed.ok().as_ref(), Some(&url), "{s:?} -> {rendered:?}");
            let _ = url.to_package_identifier();
            let _ = url.to_transport_url();
        }
    }
});
