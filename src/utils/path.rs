//! Slash-separated path utilities.

/// Normalize a `/`-separated path.
///
/// Repeated separators collapse, `.` segments are dropped, `..` removes the
/// preceding segment, and a trailing separator is removed. A leading `/` is
/// preserved. Returns `None` if `..` climbs above the root.
pub fn normalize_path(path: &str) -> Option<String> {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }

    let joined = segments.join("/");
    Some(if absolute { format!("/{joined}") } else { joined })
}

/// Join `child` onto `base` and normalize the result.
pub fn join_path(base: &str, child: &str) -> Option<String> {
    if child.is_empty() {
        return normalize_path(base);
    }
    normalize_path(&format!("{base}/{child}"))
}
