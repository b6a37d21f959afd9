//! Configuration types for the serializer.

use super::defaults::{DEFAULT_ENCODING, DEFAULT_SPEC_VERSION};
use crate::error::{BomTreeError, Result};
use crate::serializers::cyclonedx::cleaner::DEFAULT_AUTO_REF_PREFIX;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Serializer Configuration
// ============================================================================

/// Serializer configuration, loadable from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SerializerConfig {
    /// Target version and encoding
    pub output: OutputConfig,
    /// Conversion behavior flags
    pub behavior: BehaviorConfig,
}

impl SerializerConfig {
    /// Create a `SerializerConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `SerializerConfig` builder.
    pub fn builder() -> SerializerConfigBuilder {
        SerializerConfigBuilder::default()
    }

    /// Parse a configuration from YAML text.
    ///
    /// Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| BomTreeError::config(format!("failed to parse YAML: {e}")))
    }

    /// Serialize the configuration to YAML text.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BomTreeError::config(format!("failed to write YAML: {e}")))
    }
}

// ============================================================================
// Builder for SerializerConfig
// ============================================================================

/// Builder for constructing `SerializerConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct SerializerConfigBuilder {
    config: SerializerConfig,
}

impl SerializerConfigBuilder {
    /// Set the CycloneDX version to write.
    pub fn spec_version(mut self, version: impl Into<String>) -> Self {
        self.config.output.spec_version = version.into();
        self
    }

    /// Set the output encoding.
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.config.output.encoding = encoding.into();
        self
    }

    /// Fail the conversion when anything is lost.
    pub const fn strict(mut self, strict: bool) -> Self {
        self.config.behavior.strict = strict;
        self
    }

    /// Log every degradation at warn level.
    pub const fn log_degradations(mut self, enabled: bool) -> Self {
        self.config.behavior.log_degradations = enabled;
        self
    }

    /// Clear generated references before output.
    pub const fn clear_auto_refs(mut self, enabled: bool) -> Self {
        self.config.behavior.clear_auto_refs = enabled;
        self
    }

    /// Set the generated-reference prefix.
    pub fn auto_ref_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.behavior.auto_ref_prefix = prefix.into();
        self
    }

    /// Build the `SerializerConfig`.
    #[must_use]
    pub fn build(self) -> SerializerConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// CycloneDX version to write (1.2 to 1.6)
    pub spec_version: String,
    /// Output encoding (json or xml)
    pub encoding: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            spec_version: DEFAULT_SPEC_VERSION.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Turn a non-empty degradation report into an error
    pub strict: bool,
    /// Log each degradation at warn level
    pub log_degradations: bool,
    /// Clear references generated at ingestion time
    pub clear_auto_refs: bool,
    /// Prefix of generated references
    pub auto_ref_prefix: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            log_degradations: true,
            clear_auto_refs: true,
            auto_ref_prefix: DEFAULT_AUTO_REF_PREFIX.to_string(),
        }
    }
}
