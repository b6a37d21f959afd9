//! Property-based tests for the graph-to-tree conversion.
//!
//! Random graphs only reference existing nodes, so every conversion must
//! succeed and the structural invariants must hold for all of them.

use bomtree::model::{Component, HashAlgorithm, SoftwareIdentifierType};
use bomtree::serializers::cyclonedx::{DEFAULT_AUTO_REF_PREFIX, map_node, strip_auto_refs};
use bomtree::{
    Bom, CycloneDxSerializer, DegradationReport, Document, Edge, Node, RelationshipKind,
    SerializeOptions,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const KINDS: [RelationshipKind; 3] = [
    RelationshipKind::Contains,
    RelationshipKind::DependsOn,
    RelationshipKind::Describes,
];

fn build_graph(
    node_count: usize,
    edges: &[(usize, usize, Vec<usize>)],
    root: Option<usize>,
) -> Document {
    let mut doc = Document::default();
    for i in 0..node_count {
        doc.node_list.add_node(Node::new(format!("n{i}"), format!("node-{i}")));
    }
    for (from, kind, to) in edges {
        doc.node_list.add_edge(Edge::new(
            format!("n{}", from % node_count),
            KINDS[kind % KINDS.len()],
            to.iter().map(|t| format!("n{}", t % node_count)),
        ));
    }
    if let Some(root) = root {
        doc.node_list.add_root(format!("n{}", root % node_count));
    }
    doc
}

fn graph_strategy(kinds: usize) -> impl Strategy<Value = Document> {
    (1usize..16).prop_flat_map(move |n| {
        (
            Just(n),
            prop::collection::vec(
                (0..n, 0..kinds, prop::collection::vec(0..n, 1..5)),
                0..24,
            ),
            prop::option::of(0..n),
        )
            .prop_map(|(n, edges, root)| build_graph(n, &edges, root))
    })
}

fn convert(doc: &Document) -> Bom {
    CycloneDxSerializer::default()
        .serialize(doc, &SerializeOptions::default())
        .expect("graphs without dangling edges always convert")
        .into_document()
}

fn ref_counts(bom: &Bom) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    bom.walk_components(&mut |c| {
        *counts.entry(c.bom_ref.clone()).or_insert(0) += 1;
    });
    counts
}

fn dedup(targets: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    targets
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

fn component_tree() -> impl Strategy<Value = Component> {
    let reference = "(protobom-(auto|x|y-auto)--[0-9]{1,3}|protobom-auto|[a-z]{1,6}|)";
    let leaf = reference.prop_map(|r| Component::new(r, "leaf"));
    leaf.prop_recursive(4, 48, 4, move |inner| {
        (reference, prop::collection::vec(inner, 0..4)).prop_map(|(r, children)| {
            let mut component = Component::new(r, "branch");
            component.components = children;
            component
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn output_references_are_unique(doc in graph_strategy(KINDS.len())) {
        let bom = convert(&doc);
        for (bom_ref, count) in ref_counts(&bom) {
            prop_assert!(count == 1, "reference {} appears {} times", bom_ref, count);
        }
    }

    #[test]
    fn containment_only_graphs_keep_every_node_once(doc in graph_strategy(1)) {
        let bom = convert(&doc);
        let counts = ref_counts(&bom);
        for node in &doc.node_list.nodes {
            prop_assert_eq!(counts.get(&node.id).copied(), Some(1), "node {}", node.id);
        }
        prop_assert!(bom.dependencies.is_empty());
    }

    #[test]
    fn dependencies_follow_edge_order(doc in graph_strategy(KINDS.len())) {
        let bom = convert(&doc);
        let mut edges = doc
            .node_list
            .edges
            .iter()
            .filter(|e| e.kind == RelationshipKind::DependsOn);

        for dependency in &bom.dependencies {
            let matched = edges.by_ref().any(|edge| {
                edge.from == dependency.reference && dedup(&edge.to) == dependency.depends_on
            });
            prop_assert!(matched, "dependency {:?} out of edge order", dependency);
            prop_assert_eq!(dedup(&dependency.depends_on), dependency.depends_on.clone());
        }
    }

    #[test]
    fn strip_is_idempotent(mut tree in prop::collection::vec(component_tree(), 0..4)) {
        strip_auto_refs(&mut tree, DEFAULT_AUTO_REF_PREFIX);
        let once = tree.clone();
        let cleared = strip_auto_refs(&mut tree, DEFAULT_AUTO_REF_PREFIX);
        prop_assert_eq!(cleared, 0);
        prop_assert_eq!(tree, once);
    }

    #[test]
    fn strip_is_identity_without_synthetic_refs(
        mut tree in prop::collection::vec(component_tree(), 0..4)
    ) {
        fn rename(component: &mut Component) {
            if component.bom_ref.starts_with(DEFAULT_AUTO_REF_PREFIX) {
                component.bom_ref = component.bom_ref.replacen("protobom-", "native-", 1);
            }
            component.components.iter_mut().for_each(rename);
        }
        tree.iter_mut().for_each(rename);

        let original = tree.clone();
        prop_assert_eq!(strip_auto_refs(&mut tree, DEFAULT_AUTO_REF_PREFIX), 0);
        prop_assert_eq!(tree, original);
    }

    #[test]
    fn mapper_never_panics(
        id in "\\PC{0,20}",
        purpose in "\\PC{0,20}",
        license in "\\PC{0,40}",
        purl in "\\PC{0,40}",
    ) {
        let node = Node::new(id.clone(), "fuzzed")
            .with_purpose(purpose)
            .with_license(license)
            .with_hash(HashAlgorithm::Md4, "00")
            .with_identifier(SoftwareIdentifierType::Purl, purl);
        let mut report = DegradationReport::new();
        let component = map_node(&node, &mut report);
        prop_assert_eq!(component.is_some(), !id.is_empty());
        if component.is_some() {
            prop_assert!(!report.is_empty());
        }
    }
}
