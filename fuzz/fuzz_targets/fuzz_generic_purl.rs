#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz generic version inference.
///
/// Exercises identifier parsing, scoring, extraction and evidence
/// assembly on arbitrary names.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_canon::inference::score(s);
        if let Ok(inferencer) = sbom_canon::GenericVersionInferencer::parse(&format!("pkg:generic/{s}")) {
            let _ = inferencer.extract_version();
            let _ = inferencer.as_identity_evidence();
        }
    }
});
