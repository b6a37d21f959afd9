//! Default configurations and presets.

use super::types::{BehaviorConfig, OutputConfig, SerializerConfig};

/// Default CycloneDX version
pub const DEFAULT_SPEC_VERSION: &str = "1.5";

/// Default output encoding
pub const DEFAULT_ENCODING: &str = "json";

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Report degradations and keep going
    Default,
    /// Keep going without logging each degradation
    Lenient,
    /// Fail on any information loss
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "lenient" | "permissive" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Log each degradation and return the document",
            Self::Lenient => "Return the document, only a summary line is logged",
            Self::Strict => "Fail the conversion if any information is lost",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Lenient, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl SerializerConfig {
    /// Create a `SerializerConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Lenient => Self::lenient_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    /// Lenient preset.
    ///
    /// - Degradations are reported but not logged one by one
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                log_degradations: false,
                ..BehaviorConfig::default()
            },
        }
    }

    /// Strict preset.
    ///
    /// - Any degradation fails the conversion
    /// - Each degradation is still logged
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                strict: true,
                ..BehaviorConfig::default()
            },
        }
    }
}
