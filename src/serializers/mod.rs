//! Serializers from the graph model into tree-shaped SBOM formats.
//!
//! ## Usage
//!
//! ```
//! use bomtree::model::{Document, Edge, Node, RelationshipKind};
//! use bomtree::serializers::{CycloneDxSerializer, SerializeOptions};
//!
//! let mut doc = Document::default();
//! doc.node_list.add_node(Node::new("app", "app").with_purpose("application"));
//! doc.node_list.add_node(Node::new("lib", "lib").with_purpose("library"));
//! doc.node_list.add_edge(Edge::new("app", RelationshipKind::Contains, ["lib"]));
//! doc.node_list.add_root("app");
//!
//! let serializer = CycloneDxSerializer::new("1.5", "json");
//! let conversion = serializer.serialize(&doc, &SerializeOptions::default()).unwrap();
//! assert_eq!(conversion.document.root().unwrap().components.len(), 1);
//!
//! let mut out = Vec::new();
//! serializer.render(&conversion.document, &mut out).unwrap();
//! ```

pub mod cyclonedx;
mod degradation;
mod interrupt;
mod traits;

pub use cyclonedx::CycloneDxSerializer;
pub use degradation::{Degradation, DegradationKind, DegradationReport};
pub use interrupt::Interrupt;
pub use traits::{Conversion, SerializeOptions, Serializer};

use crate::config::SerializerConfig;
use crate::error::Result;
use crate::model::Document;
use std::io::Write;

/// Convert `document` with `config` and write the result to `writer`.
///
/// Returns the degradation report of the conversion.
pub fn serialize_document(
    document: &Document,
    config: &SerializerConfig,
    writer: &mut dyn Write,
) -> Result<DegradationReport> {
    CycloneDxSerializer::from_config(config)?.serialize_to(
        document,
        &SerializeOptions::default(),
        writer,
    )
}
