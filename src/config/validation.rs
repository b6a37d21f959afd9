//! Configuration validation.

use super::types::{BehaviorConfig, OutputConfig, SerializerConfig};
use crate::encoding::{Encoding, SpecVersion};
use crate::error::{BomTreeError, Result};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for SerializerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Err(e) = SpecVersion::parse(&self.spec_version) {
            errors.push(ConfigError {
                field: "output.spec_version".to_string(),
                message: e.to_string(),
            });
        }
        if let Err(e) = Encoding::parse(&self.encoding) {
            errors.push(ConfigError {
                field: "output.encoding".to_string(),
                message: e.to_string(),
            });
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.clear_auto_refs && self.auto_ref_prefix.trim().is_empty() {
            errors.push(ConfigError {
                field: "behavior.auto_ref_prefix".to_string(),
                message: "Prefix must not be empty while clear_auto_refs is enabled".to_string(),
            });
        }
        errors
    }
}

impl SerializerConfig {
    /// Return the configuration if it is valid, or a config error listing
    /// every problem found.
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(BomTreeError::config(joined))
    }
}
