//! **Graph-to-tree SBOM serialization into CycloneDX.**
//!
//! `bomtree` takes a format-neutral, graph-shaped SBOM [`Document`] (nodes,
//! typed edges, declared roots) and produces a tree-shaped CycloneDX
//! [`Bom`]: a root component with nested children, a list of top-level
//! components and a list of dependency records. The result can then be written
//! as JSON or XML for CycloneDX 1.2 to 1.6.
//!
//! Information that has no place in the tree (an unsupported hash algorithm,
//! a second supplier, an edge kind CycloneDX cannot express) never aborts the
//! conversion. It is collected in a [`DegradationReport`] returned next to the
//! document, so callers can warn, fail, or ignore it.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the input graph model ([`Document`], [`Node`], [`Edge`]) and
//!   the output tree model ([`Bom`], [`Component`]).
//! - **[`serializers`]**: the [`CycloneDxSerializer`], its conversion stages and
//!   the [`DegradationReport`].
//! - **[`encoding`]**: the [`BomEncoder`] writing a `Bom` as JSON or XML.
//! - **[`config`]**: [`SerializerConfig`] with presets, validation and YAML
//!   parsing.
//! - **[`error`]**: the [`BomTreeError`] hierarchy.
//!
//! ## Getting Started
//!
//! ```
//! use bomtree::{CycloneDxSerializer, Document, Edge, Node, RelationshipKind, SerializeOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut doc = Document::default();
//!     doc.node_list.add_node(Node::new("root-1", "my-app").with_purpose("application"));
//!     doc.node_list.add_node(Node::new("comp-1", "openssl").with_version("3.0.2"));
//!     doc.node_list.add_edge(Edge::new("root-1", RelationshipKind::Contains, ["comp-1"]));
//!     doc.node_list.add_root("root-1");
//!
//!     let serializer = CycloneDxSerializer::new("1.5", "json");
//!     let conversion = serializer.serialize(&doc, &SerializeOptions::default())?;
//!     for degradation in &conversion.report {
//!         eprintln!("lost: {degradation}");
//!     }
//!
//!     let mut out = Vec::new();
//!     serializer.render(&conversion.document, &mut out)?;
//!     println!("{}", String::from_utf8(out)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Large documents can be aborted through an [`Interrupt`] carried by
//! [`SerializeOptions`]: a shared flag, a deadline, or both. It is checked for
//! every node and every edge.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors sections are not written for every fallible fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod model;
pub mod serializers;

// Re-export main types for convenience
pub use config::{
    ConfigError, ConfigPreset, SerializerConfig, SerializerConfigBuilder, Validatable,
};
pub use encoding::{BomEncoder, Encoding, SpecVersion};
pub use error::{BomTreeError, EncodeErrorKind, ErrorContext, Result};
pub use model::{Bom, Component, Dependency, Document, Edge, Node, NodeList, RelationshipKind};
pub use serializers::{
    Conversion, CycloneDxSerializer, Degradation, DegradationKind, DegradationReport, Interrupt,
    SerializeOptions, Serializer, serialize_document,
};
