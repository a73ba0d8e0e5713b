//! Shared utilities.

mod path;

pub use path::{join_path, normalize_path};
