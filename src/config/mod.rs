//! Serializer configuration.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets
//! - YAML parsing from text (the crate never touches the filesystem)
//!
//! # Quick Start
//!
//! ```rust
//! use bomtree::config::{ConfigPreset, SerializerConfig, Validatable};
//!
//! // Use defaults
//! let config = SerializerConfig::default();
//! assert!(config.is_valid());
//!
//! // Use a preset
//! let config = SerializerConfig::from_preset(ConfigPreset::Strict);
//! assert!(config.behavior.strict);
//!
//! // Use builder
//! let config = SerializerConfig::builder()
//!     .spec_version("1.6")
//!     .encoding("xml")
//!     .build();
//! assert_eq!(config.output.encoding, "xml");
//! ```
//!
//! # YAML
//!
//! ```yaml
//! output:
//!   spec_version: "1.5"
//!   encoding: json
//! behavior:
//!   strict: false
//!   auto_ref_prefix: protobom-
//! ```

mod defaults;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_ENCODING, DEFAULT_SPEC_VERSION};
pub use types::{BehaviorConfig, OutputConfig, SerializerConfig, SerializerConfigBuilder};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `SerializerConfig` format.
///
/// Editors can use it for validation and autocompletion of YAML configs.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(SerializerConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::BomTreeError::config(format!("schema serialization: {e}")))
}
