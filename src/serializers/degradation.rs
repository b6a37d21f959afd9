//! Structured record of information lost during a conversion.
//!
//! A degradation never aborts the conversion. Entries are collected in
//! document order and returned next to the result so callers can decide to
//! warn, to fail (strict mode) or to ignore them.

use serde::Serialize;

/// Kinds of non-fatal information loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum DegradationKind {
    /// Hash algorithm with no CycloneDX equivalent
    UnmappedHashAlgorithm,
    /// Primary purpose outside the component type table
    UnrecognizedPurpose,
    /// Declared root beyond the first one
    ExtraRootElement,
    /// Declared root id that matches no node
    MissingRootElement,
    /// Supplier beyond the first one
    ExtraSupplier,
    /// Relationship kind with no tree representation
    UnsupportedRelationship,
    /// Repeated target within one dependency edge
    DuplicateDependencyTarget,
    /// Node that could not be turned into a component
    UnmappableNode,
    /// Node id already used by an earlier node
    DuplicateNodeId,
    /// Identifier kind CycloneDX cannot carry
    DroppedIdentifier,
    /// CPE 2.2 value hidden by a CPE 2.3 value
    ShadowedCpe,
    /// Package URL that does not parse
    MalformedPackageUrl,
    /// External reference type outside the CycloneDX vocabulary
    NonStandardExternalReference,
    /// Edge whose source was already attached elsewhere
    SkippedEdge,
    /// Containment target already attached elsewhere
    AlreadyPlaced,
    /// Dependency record naming a generated reference that was cleared
    SyntheticDependencyReference,
}

impl DegradationKind {
    /// Short label for logs and summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnmappedHashAlgorithm => "unmapped hash algorithm",
            Self::UnrecognizedPurpose => "unrecognized primary purpose",
            Self::ExtraRootElement => "extra root element",
            Self::MissingRootElement => "missing root element",
            Self::ExtraSupplier => "extra supplier",
            Self::UnsupportedRelationship => "unsupported relationship",
            Self::DuplicateDependencyTarget => "duplicate dependency target",
            Self::UnmappableNode => "unmappable node",
            Self::DuplicateNodeId => "duplicate node id",
            Self::DroppedIdentifier => "dropped identifier",
            Self::ShadowedCpe => "shadowed CPE",
            Self::MalformedPackageUrl => "malformed package URL",
            Self::NonStandardExternalReference => "non-standard external reference",
            Self::SkippedEdge => "skipped edge",
            Self::AlreadyPlaced => "already placed",
            Self::SyntheticDependencyReference => "synthetic dependency reference",
        }
    }
}

impl std::fmt::Display for DegradationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One information-loss entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degradation {
    pub kind: DegradationKind,
    /// Node the loss applies to, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    pub message: String,
}

impl std::fmt::Display for Degradation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{}] node {id}: {}", self.kind, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

/// Ordered collection of degradations for one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DegradationReport {
    entries: Vec<Degradation>,
}

impl DegradationReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a degradation tied to a node
    pub fn node(
        &mut self,
        kind: DegradationKind,
        node_id: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.entries.push(Degradation {
            kind,
            node_id: Some(node_id.into()),
            message: message.into(),
        });
    }

    /// Record a document-level degradation
    pub fn document(&mut self, kind: DegradationKind, message: impl Into<String>) {
        self.entries.push(Degradation {
            kind,
            node_id: None,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Degradation> {
        self.entries.iter()
    }

    /// Entries of one kind
    pub fn of_kind(&self, kind: DegradationKind) -> impl Iterator<Item = &Degradation> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }

    /// Number of entries of one kind
    #[must_use]
    pub fn count(&self, kind: DegradationKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Whether any entry has the given kind
    #[must_use]
    pub fn contains(&self, kind: DegradationKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    /// Emit one `warn` event per entry
    pub fn log_entries(&self) {
        for entry in &self.entries {
            tracing::warn!(
                kind = %entry.kind,
                node = entry.node_id.as_deref().unwrap_or(""),
                "{}",
                entry.message
            );
        }
    }

    /// Log a single summary line if anything was lost.
    pub fn log_summary(&self) {
        if !self.entries.is_empty() {
            tracing::info!(
                degradations = self.entries.len(),
                "Conversion lost information in {} place(s); inspect the degradation report \
                 for details.",
                self.entries.len()
            );
        }
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<Degradation> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a DegradationReport {
    type Item = &'a Degradation;
    type IntoIter = std::slice::Iter<'a, Degradation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
