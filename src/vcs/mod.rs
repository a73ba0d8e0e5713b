//! Version control locators.
//!
//! Parses repository URLs in URI or SCP-like form into a canonical
//! [`VcsUrl`] that can be rendered back, turned into a transport URL or
//! projected onto a `generic` package identifier.

mod locator;
mod url;

pub use url::{VcsUrl, DEFAULT_TOOL, DEFAULT_TRANSPORT, VCS_URL_QUALIFIER};
