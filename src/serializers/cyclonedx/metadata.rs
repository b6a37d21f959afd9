//! Document-level metadata: lifecycles, authors, tools and header fields.

use super::mapper::contact;
use crate::error::{BomTreeError, Result};
use crate::model::{
    BomMetadata, CdxTool, Component, DocumentType, DocumentTypeKind, Lifecycle, LifecyclePhase,
    Metadata,
};

/// Translate a typed document classification into a lifecycle phase.
///
/// `OTHER` uses the entry's name, lower-cased, as a custom phase.
pub fn lifecycle_phase(entry: &DocumentType, kind: DocumentTypeKind) -> Result<LifecyclePhase> {
    match kind {
        DocumentTypeKind::Build => Ok(LifecyclePhase::Build),
        DocumentTypeKind::Design => Ok(LifecyclePhase::Design),
        DocumentTypeKind::Analyzed => Ok(LifecyclePhase::PostBuild),
        DocumentTypeKind::Source => Ok(LifecyclePhase::PreBuild),
        DocumentTypeKind::Decomission => Ok(LifecyclePhase::Decommission),
        DocumentTypeKind::Deployed => Ok(LifecyclePhase::Operations),
        DocumentTypeKind::Discovery => Ok(LifecyclePhase::Discovery),
        DocumentTypeKind::Other => match entry.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(LifecyclePhase::Custom(name.to_lowercase())),
            _ => Err(BomTreeError::unsupported_enum(
                "document type OTHER without a name",
                kind.to_string(),
            )),
        },
        DocumentTypeKind::Unrecognized => Err(BomTreeError::unsupported_enum(
            "document type",
            entry.name.clone().unwrap_or_else(|| kind.to_string()),
        )),
    }
}

/// Map every document type entry to a lifecycle, in order.
///
/// Entries without a typed classification become free-text lifecycles.
pub fn map_lifecycles(types: &[DocumentType]) -> Result<Vec<Lifecycle>> {
    types
        .iter()
        .map(|entry| match entry.kind {
            Some(kind) => lifecycle_phase(entry, kind).map(|phase| Lifecycle::Phase { phase }),
            None => Ok(Lifecycle::Named {
                name: entry.name.clone().unwrap_or_default(),
                description: entry.description.clone().unwrap_or_default(),
            }),
        })
        .collect()
}

/// Build the metadata block, without the root component.
pub fn map_metadata(metadata: &Metadata) -> Result<BomMetadata> {
    Ok(BomMetadata {
        timestamp: metadata.date,
        lifecycles: map_lifecycles(&metadata.document_types)?,
        tools: metadata
            .tools
            .iter()
            .map(|tool| CdxTool {
                vendor: tool.vendor.clone(),
                name: tool.name.clone(),
                version: tool.version.clone(),
            })
            .collect(),
        authors: metadata.authors.iter().map(contact).collect(),
        component: None,
    })
}

/// BOM version from the document version; anything that is not a positive
/// integer falls back to 1.
#[must_use]
pub fn bom_version(metadata: &Metadata) -> u32 {
    metadata
        .version
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .unwrap_or(1)
}

/// Let a non-empty document name override the root component's name.
///
/// Creates a bare root component when none was resolved.
pub fn apply_document_name(root: &mut Option<Component>, name: &str) {
    if name.is_empty() {
        return;
    }
    match root {
        Some(component) => name.clone_into(&mut component.name),
        None => *root = Some(Component::new(String::new(), name)),
    }
}
