use bomtree::model::{CdxHashAlgorithm, ComponentType, Lifecycle, LifecyclePhase};
use bomtree::{
    BomTreeError, CycloneDxSerializer, DegradationKind, Document, SerializeOptions,
};
use std::path::Path;

fn load(name: &str) -> Document {
    let path = Path::new("tests/fixtures/graph").join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

#[test]
fn golden_webapp_tree() {
    let doc = load("webapp.json");
    let conversion = CycloneDxSerializer::default()
        .serialize(&doc, &SerializeOptions::default())
        .expect("webapp fixture converts");
    let bom = &conversion.document;

    assert_eq!(bom.serial_number, "urn:uuid:0f5c4a4e-8a3b-4c8e-9d7a-2b1f3e6d9c10");
    assert_eq!(bom.version, 3);

    // document name overrides the root name
    let root = bom.root().expect("root resolved");
    assert_eq!(root.bom_ref, "acme-webapp");
    assert_eq!(root.name, "acme-webapp");
    assert_eq!(root.component_type, Some(ComponentType::Application));
    assert_eq!(
        root.supplier.as_ref().map(|s| s.url.clone()),
        Some(vec!["https://acme.example".to_string()])
    );

    let children: Vec<_> = root.components.iter().map(|c| c.bom_ref.as_str()).collect();
    assert_eq!(children, vec!["pkg:npm/express@4.18.2", ""]);
    assert_eq!(root.components[1].name, "vendored-helpers");

    let express = &root.components[0];
    assert_eq!(express.hashes.len(), 1);
    assert_eq!(express.hashes[0].algorithm, CdxHashAlgorithm::Sha256);
    assert_eq!(express.purl, "pkg:npm/express@4.18.2");

    // express is nested, so its own dependency edge is skipped and debug stays top-level
    let top_level: Vec<_> = bom.components.iter().map(|c| c.bom_ref.as_str()).collect();
    assert_eq!(top_level, vec!["pkg:npm/debug@2.6.9", "README.md"]);
    assert_eq!(bom.components[1].component_type, Some(ComponentType::File));

    assert_eq!(bom.dependencies.len(), 1);
    assert_eq!(bom.dependencies[0].reference, "acme-webapp");
    assert_eq!(bom.dependencies[0].depends_on, vec!["pkg:npm/lodash@4.17.21"]);
    assert!(bom.find_component("pkg:npm/lodash@4.17.21").is_none());

    assert_eq!(
        bom.metadata.lifecycles,
        vec![
            Lifecycle::Phase {
                phase: LifecyclePhase::Build
            },
            Lifecycle::Named {
                name: "nightly".to_string(),
                description: "Nightly pipeline output".to_string(),
            },
        ]
    );
    assert_eq!(bom.metadata.tools[0].vendor, "bom-squad");
    assert_eq!(bom.metadata.authors[0].email, "releng@acme.example");
    assert!(bom.metadata.timestamp.is_some());

    let report = &conversion.report;
    assert_eq!(report.len(), 3);
    assert_eq!(report.count(DegradationKind::UnmappedHashAlgorithm), 1);
    assert_eq!(report.count(DegradationKind::SkippedEdge), 1);
    assert_eq!(report.count(DegradationKind::UnsupportedRelationship), 1);
}

#[test]
fn golden_webapp_json_output() {
    let doc = load("webapp.json");
    let serializer = CycloneDxSerializer::new("1.5", "json");
    let bom = serializer
        .serialize(&doc, &SerializeOptions::default())
        .expect("converts")
        .into_document();

    let mut out = Vec::new();
    serializer.render(&bom, &mut out).expect("renders");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");

    assert_eq!(value["bomFormat"], "CycloneDX");
    assert_eq!(value["specVersion"], "1.5");
    assert_eq!(value["metadata"]["component"]["name"], "acme-webapp");
    assert_eq!(value["metadata"]["lifecycles"][0]["phase"], "build");
    assert_eq!(
        value["metadata"]["component"]["components"][0]["hashes"][0]["alg"],
        "SHA-256"
    );
    assert_eq!(
        value["metadata"]["component"]["licenses"][0]["license"]["id"],
        "Apache-2.0"
    );
    // cleared reference is omitted entirely
    assert!(value["metadata"]["component"]["components"][1].get("bom-ref").is_none());
    assert_eq!(value["dependencies"][0]["dependsOn"][0], "pkg:npm/lodash@4.17.21");
}

#[test]
fn golden_webapp_json_is_deterministic() {
    let doc = load("webapp.json");
    let serializer = CycloneDxSerializer::new("1.6", "json");
    let render = || {
        let bom = serializer
            .serialize(&doc, &SerializeOptions::default())
            .expect("converts")
            .into_document();
        let mut out = Vec::new();
        serializer.render(&bom, &mut out).expect("renders");
        out
    };
    assert_eq!(render(), render());
}

#[test]
fn golden_webapp_legacy_xml() {
    let doc = load("webapp.json");
    let serializer = CycloneDxSerializer::new("1.4", "xml");
    let bom = serializer
        .serialize(&doc, &SerializeOptions::default())
        .expect("converts")
        .into_document();

    let mut out = Vec::new();
    serializer.render(&bom, &mut out).expect("renders");
    let xml = String::from_utf8(out).expect("utf-8");

    assert!(xml.contains("xmlns=\"http://cyclonedx.org/schema/bom/1.4\""));
    assert!(xml.contains("version=\"3\""));
    assert!(!xml.contains("<lifecycles>"));
    assert!(xml.contains("<purl>pkg:npm/express@4.18.2</purl>"));
    assert!(xml.contains("<id>Apache-2.0</id>"));
    assert!(xml.contains("<dependency ref=\"pkg:npm/lodash@4.17.21\"/>"));
}

#[test]
fn golden_dangling_edge_is_fatal() {
    let doc = load("dangling-edge.json");
    let err = CycloneDxSerializer::default()
        .serialize(&doc, &SerializeOptions::default())
        .expect_err("dangling edge must fail");
    match err {
        BomTreeError::Lookup { context, id } => {
            assert_eq!(id, "uclibc-ng");
            assert!(context.starts_with("edge #2"), "context was: {context}");
        }
        other => panic!("Expected Lookup error, got {other:?}"),
    }
}

#[test]
fn golden_unknown_document_type_is_fatal() {
    let doc = load("unknown-document-type.json");
    let err = CycloneDxSerializer::default()
        .serialize(&doc, &SerializeOptions::default())
        .expect_err("unknown document type must fail");
    assert!(matches!(err, BomTreeError::UnsupportedEnum { .. }));
}
