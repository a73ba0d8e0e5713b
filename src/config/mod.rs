//! Configuration module for sbom-canon.
//!
//! This module provides:
//! - The [`InferenceConfig`] type (scoring weights plus reference corpus)
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sbom_canon::config::load_or_default;
//! use sbom_canon::inference::GenericVersionInferencer;
//!
//! let (config, _loaded_from) = load_or_default(None);
//! let inferencer = GenericVersionInferencer::with_config(
//!     "pkg:generic/my-product-1.2.3.zip".parse()?,
//!     &config,
//! )?;
//! # Ok::<(), sbom_canon::CanonError>(())
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-canon.yaml` file in your project root or `~/.config/sbom-canon/`:
//!
//! ```yaml
//! weights:
//!   digit_ratio: 4.0
//! reference_identifiers:
//!   - pkg:generic/product-1.2.3-artifact.zip
//! ```

pub mod file;
mod types;
mod validation;

pub use types::InferenceConfig;
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
