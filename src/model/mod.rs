//! Data model for both sides of the conversion.
//!
//! The input side is a generic, graph-shaped SBOM: a flat list of [`Node`]s,
//! typed [`Edge`]s between them and a list of declared root elements. The
//! output side is a tree-shaped CycloneDX [`Bom`] whose [`Component`]s nest
//! inside their containers, with non-containment relationships kept in a
//! separate [`Dependency`] list.
//!
//! ```
//! use bomtree::model::{Document, Edge, Node, RelationshipKind};
//!
//! let mut doc = Document::default();
//! doc.node_list.add_node(Node::new("app", "my-app").with_purpose("application"));
//! doc.node_list.add_node(Node::new("lib", "zlib").with_purpose("library"));
//! doc.node_list.add_edge(Edge::new("app", RelationshipKind::Contains, ["lib"]));
//! doc.node_list.add_root("app");
//! assert_eq!(doc.node_list.len(), 2);
//! ```

mod bom;
mod component;
mod document;
mod node;

pub use bom::*;
pub use component::*;
pub use document::*;
pub use node::*;
