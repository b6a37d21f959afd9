//! Relationship resolution: turn graph edges into nesting and dependencies.
//!
//! Edges are processed strictly in document order. Containment edges copy the
//! target's current record into the source's child list; dependency edges
//! produce one [`Dependency`] record each. Other relationship kinds have no
//! tree representation and are only reported.

use super::state::{ConversionState, Placement};
use crate::error::{BomTreeError, ErrorContext, Result};
use crate::model::{Dependency, Document, Edge, RelationshipKind};
use crate::serializers::degradation::{DegradationKind, DegradationReport};
use crate::serializers::interrupt::Interrupt;
use std::collections::HashSet;

/// Resolve every edge of the document, returning dependency records in edge
/// order.
///
/// Fails with a lookup error, naming the edge, when an edge references a node
/// that is not in the registry.
pub fn build_dependencies(
    state: &mut ConversionState,
    document: &Document,
    interrupt: &Interrupt,
    report: &mut DegradationReport,
) -> Result<Vec<Dependency>> {
    let edges = &document.node_list.edges;
    let mut dependencies = Vec::new();

    for (index, edge) in edges.iter().enumerate() {
        interrupt.check("relationship resolution")?;

        if state.is_placed(&edge.from) && !state.is_root(&edge.from) {
            report.node(
                DegradationKind::SkippedEdge,
                edge.from.as_str(),
                format!("source is already attached elsewhere, edge '{edge}' was skipped"),
            );
            continue;
        }

        resolve_edge(state, edge, report, &mut dependencies)
            .with_context(|| format!("edge #{index} ({edge})"))?;
    }

    tracing::debug!(
        edges = edges.len(),
        dependencies = dependencies.len(),
        placed = state.placed_count(),
        "Resolved relationships"
    );
    Ok(dependencies)
}

fn resolve_edge(
    state: &mut ConversionState,
    edge: &Edge,
    report: &mut DegradationReport,
    dependencies: &mut Vec<Dependency>,
) -> Result<()> {
    if !state.contains(&edge.from) {
        return Err(BomTreeError::lookup("edge source", edge.from.as_str()));
    }

    match edge.kind {
        RelationshipKind::Contains => attach_children(state, edge, report),
        RelationshipKind::DependsOn => {
            dependencies.push(dependency_record(state, edge, report)?);
            Ok(())
        }
        other => {
            report.node(
                DegradationKind::UnsupportedRelationship,
                edge.from.as_str(),
                format!("relationship '{other}' has no tree representation"),
            );
            Ok(())
        }
    }
}

/// Copy each target's current record into the source's children.
fn attach_children(
    state: &mut ConversionState,
    edge: &Edge,
    report: &mut DegradationReport,
) -> Result<()> {
    for target in &edge.to {
        let child = state
            .component(target)
            .context("containment target")?
            .clone();

        if *target == edge.from || state.is_materialized(target) {
            report.node(
                DegradationKind::AlreadyPlaced,
                target.as_str(),
                format!("already attached, not nested under '{}'", edge.from),
            );
            continue;
        }

        state.place(target, Placement::Nested);
        state.component_mut(&edge.from)?.components.push(child);
    }
    Ok(())
}

/// Build one dependency record with targets deduplicated in first-seen order.
fn dependency_record(
    state: &mut ConversionState,
    edge: &Edge,
    report: &mut DegradationReport,
) -> Result<Dependency> {
    let mut seen = HashSet::with_capacity(edge.to.len());
    let mut targets = Vec::with_capacity(edge.to.len());

    for target in &edge.to {
        if !seen.insert(target.as_str()) {
            report.node(
                DegradationKind::DuplicateDependencyTarget,
                edge.from.as_str(),
                format!("duplicate dependency target '{target}' ignored"),
            );
            continue;
        }
        if !state.contains(target) {
            return Err(BomTreeError::lookup("dependency target", target.as_str()));
        }
        targets.push(target.clone());
    }

    for target in &targets {
        state.place(target, Placement::DependencyTarget);
    }

    Ok(Dependency::new(edge.from.clone(), targets))
}
