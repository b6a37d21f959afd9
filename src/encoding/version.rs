//! Supported CycloneDX versions and encodings, and version downgrades.

use crate::error::EncodeErrorKind;
use crate::model::{Bom, Component, ComponentType};
use std::borrow::Cow;
use std::fmt;

/// CycloneDX specification versions this crate can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
}

impl SpecVersion {
    /// All supported versions, oldest first
    pub const ALL: [Self; 5] = [Self::V1_2, Self::V1_3, Self::V1_4, Self::V1_5, Self::V1_6];

    /// Parse a version string such as `1.5` or `v1.5`
    pub fn parse(version: &str) -> Result<Self, EncodeErrorKind> {
        let trimmed = version.trim();
        let bare = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        match bare {
            "1.2" => Ok(Self::V1_2),
            "1.3" => Ok(Self::V1_3),
            "1.4" => Ok(Self::V1_4),
            "1.5" => Ok(Self::V1_5),
            "1.6" => Ok(Self::V1_6),
            _ => Err(EncodeErrorKind::UnsupportedVersion {
                version: version.to_string(),
                supported: Self::supported_list(),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1_2 => "1.2",
            Self::V1_3 => "1.3",
            Self::V1_4 => "1.4",
            Self::V1_5 => "1.5",
            Self::V1_6 => "1.6",
        }
    }

    /// Default XML namespace of this version
    #[must_use]
    pub fn xml_namespace(&self) -> String {
        format!("http://cyclonedx.org/schema/bom/{}", self.as_str())
    }

    /// Lifecycles and the 1.5 component types exist from 1.5 on
    #[must_use]
    pub fn supports_lifecycles(&self) -> bool {
        *self >= Self::V1_5
    }

    fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Json,
    Xml,
}

impl Encoding {
    /// Parse an encoding name, case-insensitively
    pub fn parse(encoding: &str) -> Result<Self, EncodeErrorKind> {
        match encoding.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(EncodeErrorKind::UnsupportedEncoding {
                encoding: encoding.to_string(),
                supported: "json, xml".to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component types introduced in CycloneDX 1.5
const fn is_v1_5_type(component_type: ComponentType) -> bool {
    matches!(
        component_type,
        ComponentType::Data
            | ComponentType::DeviceDriver
            | ComponentType::MachineLearningModel
            | ComponentType::Platform
    )
}

fn needs_downgrade(bom: &Bom) -> bool {
    if !bom.metadata.lifecycles.is_empty() {
        return true;
    }
    let mut found = false;
    bom.walk_components(&mut |c| {
        found |= c.component_type.is_some_and(is_v1_5_type);
    });
    found
}

fn clear_new_types(component: &mut Component) {
    if component.component_type.is_some_and(is_v1_5_type) {
        component.component_type = None;
    }
    for child in &mut component.components {
        clear_new_types(child);
    }
}

/// Return the document as it can be written for `version`.
///
/// Borrows the input when nothing has to change.
#[must_use]
pub fn downgrade(bom: &Bom, version: SpecVersion) -> Cow<'_, Bom> {
    if version.supports_lifecycles() || !needs_downgrade(bom) {
        return Cow::Borrowed(bom);
    }

    let mut owned = bom.clone();
    owned.metadata.lifecycles.clear();
    if let Some(root) = owned.metadata.component.as_mut() {
        clear_new_types(root);
    }
    for component in &mut owned.components {
        clear_new_types(component);
    }
    tracing::debug!(version = %version, "Downgraded document for older CycloneDX version");
    Cow::Owned(owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lifecycle, LifecyclePhase};

    #[test]
    fn test_parse_versions() {
        assert_eq!(SpecVersion::parse("1.5").ok(), Some(SpecVersion::V1_5));
        assert_eq!(SpecVersion::parse("v1.2").ok(), Some(SpecVersion::V1_2));
        assert_eq!(SpecVersion::parse(" 1.6 ").ok(), Some(SpecVersion::V1_6));
        match SpecVersion::parse("2.0") {
            Err(EncodeErrorKind::UnsupportedVersion { version, supported }) => {
                assert_eq!(version, "2.0");
                assert_eq!(supported, "1.2, 1.3, 1.4, 1.5, 1.6");
            }
            other => panic!("Expected UnsupportedVersion, got {other:?}"),
        }
        assert!(SpecVersion::parse("1.1").is_err());
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!(Encoding::parse("JSON").ok(), Some(Encoding::Json));
        assert_eq!(Encoding::parse("xml").ok(), Some(Encoding::Xml));
        assert!(matches!(
            Encoding::parse("protobuf"),
            Err(EncodeErrorKind::UnsupportedEncoding { .. })
        ));
    }

    fn modern_bom() -> Bom {
        let mut root = Component::new("root", "root");
        root.component_type = Some(ComponentType::Platform);
        let mut child = Component::new("model", "model");
        child.component_type = Some(ComponentType::MachineLearningModel);
        root.components.push(child);

        let mut lib = Component::new("lib", "lib");
        lib.component_type = Some(ComponentType::Library);

        let mut bom = Bom::default();
        bom.metadata.component = Some(root);
        bom.metadata.lifecycles.push(Lifecycle::Phase {
            phase: LifecyclePhase::Build,
        });
        bom.components.push(lib);
        bom
    }

    #[test]
    fn test_downgrade_borrows_for_new_versions() {
        let bom = modern_bom();
        assert!(matches!(downgrade(&bom, SpecVersion::V1_5), Cow::Borrowed(_)));
        assert!(matches!(downgrade(&bom, SpecVersion::V1_6), Cow::Borrowed(_)));
    }

    #[test]
    fn test_downgrade_strips_lifecycles_and_new_types() {
        let bom = modern_bom();
        let old = downgrade(&bom, SpecVersion::V1_4);

        assert!(old.metadata.lifecycles.is_empty());
        let root = old.root().expect("root kept");
        assert!(root.component_type.is_none());
        assert!(root.components[0].component_type.is_none());
        assert_eq!(old.components[0].component_type, Some(ComponentType::Library));
    }

    #[test]
    fn test_downgrade_borrows_clean_document() {
        let bom = Bom::default();
        assert!(matches!(downgrade(&bom, SpecVersion::V1_2), Cow::Borrowed(_)));
    }
}
