//! CycloneDX document: metadata, component tree and dependency list.

use super::{Component, OrganizationalContact};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Tree-shaped CycloneDX document produced by the serializer.
///
/// `bomFormat` and `specVersion` are not part of the value; the encoder adds
/// them for the version it writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bom {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub serial_number: String,
    pub version: u32,
    pub metadata: BomMetadata,
    pub components: Vec<Component>,
    pub dependencies: Vec<Dependency>,
}

impl Default for Bom {
    fn default() -> Self {
        Self {
            serial_number: String::new(),
            version: 1,
            metadata: BomMetadata::default(),
            components: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

impl Bom {
    /// The root component, if one was resolved
    #[must_use]
    pub const fn root(&self) -> Option<&Component> {
        self.metadata.component.as_ref()
    }

    /// Visit every component in the document (root subtree first), pre-order
    pub fn walk_components<'a>(&'a self, visit: &mut impl FnMut(&'a Component)) {
        if let Some(root) = &self.metadata.component {
            root.walk(visit);
        }
        for component in &self.components {
            component.walk(visit);
        }
    }

    /// Total number of materialized components, nested ones included
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut count = 0;
        self.walk_components(&mut |_| count += 1);
        count
    }

    /// Find a component anywhere in the document by reference
    #[must_use]
    pub fn find_component(&self, bom_ref: &str) -> Option<&Component> {
        self.metadata
            .component
            .iter()
            .chain(self.components.iter())
            .find_map(|c| c.find(bom_ref))
    }

    /// Get the dependency record for a reference
    #[must_use]
    pub fn dependency(&self, bom_ref: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.reference == bom_ref)
    }
}

/// Document metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BomMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lifecycles: Vec<Lifecycle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<CdxTool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<OrganizationalContact>,
    /// Root component the document describes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
}

/// Tool that produced the document (legacy array form)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CdxTool {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// Lifecycle entry: a predefined phase or a named custom lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Lifecycle {
    Phase {
        phase: LifecyclePhase,
    },
    Named {
        name: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        description: String,
    },
}

/// Lifecycle phases
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    Design,
    PreBuild,
    Build,
    PostBuild,
    Operations,
    Discovery,
    Decommission,
    /// Phase value outside the predefined set, used verbatim
    Custom(String),
}

impl LifecyclePhase {
    /// Wire value of the phase
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Design => "design",
            Self::PreBuild => "pre-build",
            Self::Build => "build",
            Self::PostBuild => "post-build",
            Self::Operations => "operations",
            Self::Discovery => "discovery",
            Self::Decommission => "decommission",
            Self::Custom(s) => s,
        }
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LifecyclePhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Dependency record: one source reference and its distinct targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(rename = "ref")]
    pub reference: String,
    pub depends_on: Vec<String>,
}

impl Dependency {
    #[must_use]
    pub const fn new(reference: String, depends_on: Vec<String>) -> Self {
        Self {
            reference,
            depends_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_json_shapes() {
        let phase = Lifecycle::Phase {
            phase: LifecyclePhase::PostBuild,
        };
        assert_eq!(
            serde_json::to_value(&phase).expect("serialize"),
            serde_json::json!({"phase": "post-build"})
        );

        let custom = Lifecycle::Phase {
            phase: LifecyclePhase::Custom("maintenance".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&custom).expect("serialize"),
            serde_json::json!({"phase": "maintenance"})
        );

        let named = Lifecycle::Named {
            name: "platform-integration".to_string(),
            description: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&named).expect("serialize"),
            serde_json::json!({"name": "platform-integration"})
        );
    }

    #[test]
    fn test_dependency_json_shape() {
        let dep = Dependency::new("a".to_string(), vec!["b".to_string()]);
        assert_eq!(
            serde_json::to_value(&dep).expect("serialize"),
            serde_json::json!({"ref": "a", "dependsOn": ["b"]})
        );
    }

    #[test]
    fn test_find_component_searches_root_and_top_level() {
        let mut root = Component::new("root", "root");
        root.components.push(Component::new("nested", "nested"));
        let bom = Bom {
            metadata: BomMetadata {
                component: Some(root),
                ..BomMetadata::default()
            },
            components: vec![Component::new("top", "top")],
            ..Bom::default()
        };

        assert!(bom.find_component("nested").is_some());
        assert!(bom.find_component("top").is_some());
        assert_eq!(bom.component_count(), 3);
        assert!(bom.root().is_some());
    }
}
