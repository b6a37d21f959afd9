//! Root resolution: pick the component the document describes.

use super::state::ConversionState;
use crate::model::{Component, Document};
use crate::serializers::degradation::{DegradationKind, DegradationReport};

/// Resolve the first declared root element against the registry.
///
/// The winning record is marked as the root, which excludes it from the
/// top-level harvest. Declared roots after the first one are reported and
/// ignored.
pub fn resolve_root(
    state: &mut ConversionState,
    document: &Document,
    report: &mut DegradationReport,
) -> Option<Component> {
    let mut roots = document.node_list.root_elements.iter();
    let first = roots.next()?;

    for extra in roots {
        report.node(
            DegradationKind::ExtraRootElement,
            extra.as_str(),
            format!("only one root is supported, '{first}' was used"),
        );
    }

    let Ok(component) = state.component(first) else {
        report.node(
            DegradationKind::MissingRootElement,
            first.as_str(),
            "declared root element matches no node",
        );
        return None;
    };
    let component = component.clone();

    state.set_root(first);
    tracing::debug!(root = %first, "Resolved root component");
    Some(component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, NodeList};

    fn setup(nodes: &[&str], roots: &[&str]) -> (ConversionState, Document) {
        let mut list = NodeList::default();
        let mut state = ConversionState::new();
        for id in nodes {
            list.add_node(Node::new(*id, format!("{id}-name")));
            state.register(Component::new(*id, format!("{id}-name")));
        }
        for id in roots {
            list.add_root(*id);
        }
        let doc = Document {
            node_list: list,
            ..Document::default()
        };
        (state, doc)
    }

    #[test]
    fn test_no_declared_root() {
        let (mut state, doc) = setup(&["a"], &[]);
        let mut report = DegradationReport::new();
        assert!(resolve_root(&mut state, &doc, &mut report).is_none());
        assert!(report.is_empty());
        assert!(state.root_id().is_none());
    }

    #[test]
    fn test_first_root_wins() {
        let (mut state, doc) = setup(&["a", "b"], &["b", "a"]);
        let mut report = DegradationReport::new();

        let root = resolve_root(&mut state, &doc, &mut report).expect("root resolved");
        assert_eq!(root.bom_ref, "b");
        assert!(state.is_root("b"));
        assert!(!state.is_placed("a"));
        assert_eq!(report.count(DegradationKind::ExtraRootElement), 1);
    }

    #[test]
    fn test_missing_root_is_reported() {
        let (mut state, doc) = setup(&["a"], &["ghost"]);
        let mut report = DegradationReport::new();
        assert!(resolve_root(&mut state, &doc, &mut report).is_none());
        assert_eq!(report.count(DegradationKind::MissingRootElement), 1);
        assert_eq!(state.placed_count(), 0);
    }
}
