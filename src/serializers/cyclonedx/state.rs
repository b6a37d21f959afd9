//! Per-call registry of component records and their placement.

use crate::error::{BomTreeError, Result};
use crate::model::Component;
use indexmap::IndexMap;
use std::collections::HashMap;

/// How a node was attached to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Consumed as the document root
    Root,
    /// Copied into a container's child list
    Nested,
    /// Referenced by a dependency record only
    DependencyTarget,
}

impl Placement {
    /// Whether the node's record is materialized in the output tree
    #[must_use]
    pub const fn is_materialized(self) -> bool {
        matches!(self, Self::Root | Self::Nested)
    }
}

/// Registry of component records for one conversion.
///
/// Created fresh for every call and passed explicitly to each stage; nothing
/// in here outlives the call or is shared with another one.
#[derive(Debug, Default)]
pub struct ConversionState {
    /// Components keyed by reference, in node order
    registry: IndexMap<String, Component>,
    placed: HashMap<String, Placement>,
    root_id: Option<String>,
}

impl ConversionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under its reference.
    ///
    /// Returns `false`, leaving the registry untouched, if the reference is
    /// already taken.
    pub fn register(&mut self, component: Component) -> bool {
        if self.registry.contains_key(&component.bom_ref) {
            return false;
        }
        self.registry.insert(component.bom_ref.clone(), component);
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.registry.contains_key(id)
    }

    /// Look up a registered component
    pub fn component(&self, id: &str) -> Result<&Component> {
        self.registry
            .get(id)
            .ok_or_else(|| BomTreeError::lookup("component registry", id))
    }

    /// Look up a registered component for mutation
    pub fn component_mut(&mut self, id: &str) -> Result<&mut Component> {
        self.registry
            .get_mut(id)
            .ok_or_else(|| BomTreeError::lookup("component registry", id))
    }

    /// Record a placement, first claim wins.
    ///
    /// A dependency-only placement is upgraded when the node is later
    /// materialized; any other existing placement is kept. Returns whether the
    /// placement was recorded.
    pub fn place(&mut self, id: &str, placement: Placement) -> bool {
        match self.placed.get(id) {
            None => {
                self.placed.insert(id.to_string(), placement);
                true
            }
            Some(Placement::DependencyTarget) if placement.is_materialized() => {
                self.placed.insert(id.to_string(), placement);
                true
            }
            Some(_) => false,
        }
    }

    #[must_use]
    pub fn placement(&self, id: &str) -> Option<Placement> {
        self.placed.get(id).copied()
    }

    #[must_use]
    pub fn is_placed(&self, id: &str) -> bool {
        self.placed.contains_key(id)
    }

    /// Whether the node already appears in the tree (as root or nested child)
    #[must_use]
    pub fn is_materialized(&self, id: &str) -> bool {
        self.placement(id).is_some_and(Placement::is_materialized)
    }

    /// Record the root and mark it placed
    pub fn set_root(&mut self, id: &str) {
        self.place(id, Placement::Root);
        self.root_id = Some(id.to_string());
    }

    #[must_use]
    pub fn root_id(&self) -> Option<&str> {
        self.root_id.as_deref()
    }

    #[must_use]
    pub fn is_root(&self, id: &str) -> bool {
        self.root_id.as_deref() == Some(id)
    }

    /// Remove the root's current record from the registry
    pub fn take_root(&mut self) -> Option<Component> {
        let id = self.root_id.as_ref()?;
        self.registry.shift_remove(id)
    }

    /// Copies of every unplaced component, in registration order
    #[must_use]
    pub fn harvest(&self) -> Vec<Component> {
        self.registry
            .iter()
            .filter(|(id, _)| !self.placed.contains_key(id.as_str()))
            .map(|(_, component)| component.clone())
            .collect()
    }

    /// Number of registered components
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of placed nodes
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(ids: &[&str]) -> ConversionState {
        let mut state = ConversionState::new();
        for id in ids {
            assert!(state.register(Component::new(*id, *id)));
        }
        state
    }

    #[test]
    fn test_register_rejects_duplicate_reference() {
        let mut state = state_with(&["a"]);
        let mut dup = Component::new("a", "other");
        dup.version = "2".to_string();
        assert!(!state.register(dup));
        assert_eq!(state.len(), 1);
        assert_eq!(state.component("a").map(|c| c.name.as_str()).ok(), Some("a"));
    }

    #[test]
    fn test_lookup_missing_is_lookup_error() {
        let state = state_with(&[]);
        match state.component("ghost") {
            Err(BomTreeError::Lookup { id, .. }) => assert_eq!(id, "ghost"),
            other => panic!("Expected Lookup error, got {other:?}"),
        }
    }

    #[test]
    fn test_first_claim_wins() {
        let mut state = state_with(&["a"]);
        assert!(state.place("a", Placement::Nested));
        assert!(!state.place("a", Placement::Nested));
        assert!(!state.place("a", Placement::DependencyTarget));
        assert_eq!(state.placement("a"), Some(Placement::Nested));
    }

    #[test]
    fn test_dependency_placement_upgrades_to_nested() {
        let mut state = state_with(&["a"]);
        assert!(state.place("a", Placement::DependencyTarget));
        assert!(!state.is_materialized("a"));
        assert!(state.place("a", Placement::Nested));
        assert!(state.is_materialized("a"));
    }

    #[test]
    fn test_harvest_skips_placed_and_keeps_order() {
        let mut state = state_with(&["c", "a", "b"]);
        state.set_root("a");
        let harvested: Vec<_> = state.harvest().into_iter().map(|c| c.bom_ref).collect();
        assert_eq!(harvested, vec!["c", "b"]);
        assert!(state.is_root("a"));
        assert_eq!(state.placed_count(), 1);
    }

    #[test]
    fn test_take_root_returns_current_record() {
        let mut state = state_with(&["root", "child"]);
        state.set_root("root");
        let child = state.component("child").cloned().expect("registered");
        state
            .component_mut("root")
            .expect("registered")
            .components
            .push(child);

        let root = state.take_root().expect("root registered");
        assert_eq!(root.components.len(), 1);
        assert!(!state.contains("root"));
    }
}
