//! Graph-shaped SBOM document: metadata plus a flat node list.

use super::{Edge, Node, Person};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic graph SBOM document.
///
/// Produced upstream by a format reader; this crate only consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Document-level metadata
    pub metadata: Metadata,
    /// Nodes, edges and declared roots
    pub node_list: NodeList,
}

impl Document {
    /// Create a document from its parts
    #[must_use]
    pub const fn new(metadata: Metadata, node_list: NodeList) -> Self {
        Self {
            metadata,
            node_list,
        }
    }
}

/// Document-level metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    /// Document identifier (serial number / namespace)
    pub id: String,
    /// Document version, usually a decimal integer
    pub version: String,
    /// Document name
    pub name: String,
    /// Creation timestamp
    pub date: Option<DateTime<Utc>>,
    pub authors: Vec<Person>,
    pub tools: Vec<Tool>,
    pub document_types: Vec<DocumentType>,
}

/// Tool that produced the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub version: String,
    pub vendor: String,
}

impl Tool {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            vendor: String::new(),
        }
    }
}

/// Classification of the document (build, source, deployed, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentType {
    /// Typed classification; `None` for free-text only entries
    #[serde(rename = "type")]
    pub kind: Option<DocumentTypeKind>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DocumentType {
    /// Create a typed entry
    #[must_use]
    pub const fn typed(kind: DocumentTypeKind) -> Self {
        Self {
            kind: Some(kind),
            name: None,
            description: None,
        }
    }

    /// Create a free-text entry with no typed classification
    #[must_use]
    pub fn named(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: None,
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Typed document classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentTypeKind {
    Other,
    Design,
    Source,
    Build,
    Analyzed,
    Deployed,
    Discovery,
    Decomission,
    /// A value this model does not know
    #[serde(other)]
    Unrecognized,
}

impl std::fmt::Display for DocumentTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Other => write!(f, "OTHER"),
            Self::Design => write!(f, "DESIGN"),
            Self::Source => write!(f, "SOURCE"),
            Self::Build => write!(f, "BUILD"),
            Self::Analyzed => write!(f, "ANALYZED"),
            Self::Deployed => write!(f, "DEPLOYED"),
            Self::Discovery => write!(f, "DISCOVERY"),
            Self::Decomission => write!(f, "DECOMISSION"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

/// Flat list of nodes and the edges between them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeList {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Ids of the nodes the document describes
    pub root_elements: Vec<String>,
}

impl NodeList {
    /// Add a node
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Add an edge
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Declare a root element
    pub fn add_root(&mut self, id: impl Into<String>) {
        self.root_elements.push(id.into());
    }

    /// Get a node by id (first match)
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
