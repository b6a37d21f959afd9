//! Graph-to-tree conversion into CycloneDX.
//!
//! One call of [`CycloneDxSerializer::serialize`] runs these stages over a
//! fresh [`ConversionState`]:
//!
//! 1. every node is mapped to a component and registered ([`mapper`])
//! 2. the first declared root is resolved and placed ([`root`])
//! 3. document metadata is mapped ([`metadata`])
//! 4. edges are resolved into nesting and dependency records ([`relationships`])
//! 5. unplaced components are harvested as top-level components
//! 6. generated references are cleared ([`cleaner`])

pub mod cleaner;
pub mod mapper;
pub mod metadata;
pub mod relationships;
pub mod root;
pub mod state;

pub use cleaner::{
    DEFAULT_AUTO_REF_PREFIX, is_auto_ref, report_synthetic_dependencies, strip_auto_refs,
};
pub use mapper::map_node;
pub use relationships::build_dependencies;
pub use root::resolve_root;
pub use state::{ConversionState, Placement};

use super::degradation::{DegradationKind, DegradationReport};
use super::interrupt::Interrupt;
use super::traits::{Conversion, SerializeOptions, Serializer};
use crate::config::{BehaviorConfig, SerializerConfig, Validatable};
use crate::encoding::BomEncoder;
use crate::error::{BomTreeError, Result};
use crate::model::{Bom, Document};
use std::io::Write;

/// CycloneDX serializer.
///
/// Holds only immutable configuration; the target version and encoding are
/// checked when rendering.
#[derive(Debug, Clone)]
pub struct CycloneDxSerializer {
    encoder: BomEncoder,
    behavior: BehaviorConfig,
}

impl CycloneDxSerializer {
    /// Create a serializer for a CycloneDX version and encoding, e.g.
    /// `("1.5", "json")`
    #[must_use]
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            encoder: BomEncoder::new(version, encoding),
            behavior: BehaviorConfig::default(),
        }
    }

    /// Create a serializer from a validated configuration
    pub fn from_config(config: &SerializerConfig) -> Result<Self> {
        let errors = config.validate();
        if let Some(first) = errors.first() {
            return Err(BomTreeError::config(first.to_string()));
        }
        Ok(Self {
            encoder: BomEncoder::new(&config.output.spec_version, &config.output.encoding),
            behavior: config.behavior.clone(),
        })
    }

    /// Fail conversions that lose information
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.behavior.strict = strict;
        self
    }

    /// Replace the behavior flags
    #[must_use]
    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub const fn encoder(&self) -> &BomEncoder {
        &self.encoder
    }

    #[must_use]
    pub const fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Convert a graph document into a CycloneDX document.
    ///
    /// Fatal errors (unknown node references, unmappable document types,
    /// cancellation) abort the call and no partial document is returned.
    /// Everything else that could not be represented is listed in the
    /// returned report.
    pub fn serialize(
        &self,
        document: &Document,
        options: &SerializeOptions,
    ) -> Result<Conversion<Bom>> {
        let interrupt = &options.interrupt;
        let mut state = ConversionState::new();
        let mut report = DegradationReport::new();

        populate_registry(&mut state, document, interrupt, &mut report)?;
        let resolved = resolve_root(&mut state, document, &mut report);
        let mut metadata = metadata::map_metadata(&document.metadata)?;
        let dependencies = build_dependencies(&mut state, document, interrupt, &mut report)?;

        // containment edges may have added children since the root was resolved
        let mut root = resolved.map(|snapshot| state.take_root().unwrap_or(snapshot));
        metadata::apply_document_name(&mut root, &document.metadata.name);

        let mut components = state.harvest();
        if self.behavior.clear_auto_refs {
            let prefix = self.behavior.auto_ref_prefix.as_str();
            let mut cleared = strip_auto_refs(&mut components, prefix);
            if let Some(root) = root.as_mut() {
                cleared += strip_auto_refs(std::slice::from_mut(root), prefix);
            }
            report_synthetic_dependencies(&dependencies, prefix, &mut report);
            tracing::debug!(cleared, "Cleared generated references");
        }

        metadata.component = root;
        let bom = Bom {
            serial_number: document.metadata.id.clone(),
            version: metadata::bom_version(&document.metadata),
            metadata,
            components,
            dependencies,
        };

        tracing::debug!(
            components = bom.component_count(),
            top_level = bom.components.len(),
            dependencies = bom.dependencies.len(),
            "Converted document to CycloneDX"
        );

        self.finish(&report)?;
        Ok(Conversion {
            document: bom,
            report,
        })
    }

    /// Write a CycloneDX document with the configured version and encoding
    pub fn render(&self, bom: &Bom, writer: &mut dyn Write) -> Result<()> {
        self.encoder.encode(bom, writer)
    }

    /// Log the report and apply strict mode
    fn finish(&self, report: &DegradationReport) -> Result<()> {
        if self.behavior.log_degradations {
            report.log_entries();
        }
        report.log_summary();

        if self.behavior.strict && !report.is_empty() {
            return Err(BomTreeError::Degraded {
                count: report.len(),
                first: report.iter().next().map(ToString::to_string).unwrap_or_default(),
            });
        }
        Ok(())
    }
}

impl Default for CycloneDxSerializer {
    fn default() -> Self {
        let config = SerializerConfig::default();
        Self {
            encoder: BomEncoder::new(config.output.spec_version, config.output.encoding),
            behavior: config.behavior,
        }
    }
}

impl Serializer for CycloneDxSerializer {
    type Output = Bom;

    fn serialize(
        &self,
        document: &Document,
        options: &SerializeOptions,
    ) -> Result<Conversion<Bom>> {
        Self::serialize(self, document, options)
    }

    fn render(&self, output: &Bom, writer: &mut dyn Write) -> Result<()> {
        Self::render(self, output, writer)
    }

    fn format_name(&self) -> &str {
        "CycloneDX"
    }
}

/// Map every node and register it; the first node with a given id wins.
fn populate_registry(
    state: &mut ConversionState,
    document: &Document,
    interrupt: &Interrupt,
    report: &mut DegradationReport,
) -> Result<()> {
    for (index, node) in document.node_list.nodes.iter().enumerate() {
        interrupt.check("registry population")?;

        let Some(component) = map_node(node, report) else {
            report.document(
                DegradationKind::UnmappableNode,
                format!("node #{index} ('{}') has no id and was skipped", node.name),
            );
            continue;
        };
        if !state.register(component) {
            report.node(
                DegradationKind::DuplicateNodeId,
                node.id.as_str(),
                format!("node #{index} reuses an id, the earlier node was kept"),
            );
        }
    }

    tracing::debug!(
        nodes = document.node_list.nodes.len(),
        registered = state.len(),
        "Populated component registry"
    );
    Ok(())
}
