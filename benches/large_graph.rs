//! Performance benchmarks for converting large graphs.
//!
//! Run with: cargo bench --bench large_graph

use bomtree::{
    BomEncoder, CycloneDxSerializer, Document, Edge, Node, RelationshipKind, SerializeOptions,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a layered graph: the root contains `fanout` packages, each
/// package contains `fanout` files, and every package depends on the next one.
fn generate_graph(fanout: usize) -> Document {
    let mut doc = Document::default();
    doc.metadata.name = "bench-product".to_string();
    doc.node_list.add_node(Node::new("root", "product").with_purpose("application"));
    doc.node_list.add_root("root");

    let mut packages = Vec::with_capacity(fanout);
    for p in 0..fanout {
        let package = format!("pkg-{p}");
        doc.node_list.add_node(
            Node::new(package.clone(), format!("package-{p}"))
                .with_version(format!("1.{}.{}", p % 10, p % 100))
                .with_purpose("library")
                .with_license("MIT OR Apache-2.0"),
        );

        let mut files = Vec::with_capacity(fanout);
        for f in 0..fanout {
            let file = format!("pkg-{p}-file-{f}");
            doc.node_list
                .add_node(Node::new(file.clone(), format!("src/file_{f}.rs")).with_purpose("file"));
            files.push(file);
        }
        doc.node_list
            .add_edge(Edge::new(package.clone(), RelationshipKind::Contains, files));
        packages.push(package);
    }

    for pair in packages.windows(2) {
        doc.node_list.add_edge(Edge::new(
            pair[0].clone(),
            RelationshipKind::DependsOn,
            [pair[1].clone()],
        ));
    }
    doc.node_list
        .add_edge(Edge::new("root", RelationshipKind::Contains, packages));
    doc
}

fn bench_serialize(c: &mut Criterion) {
    let serializer = CycloneDxSerializer::default();
    let options = SerializeOptions::default();
    let mut group = c.benchmark_group("serialize");

    for fanout in [10, 50, 100] {
        let doc = generate_graph(fanout);
        group.bench_with_input(
            BenchmarkId::from_parameter(fanout * fanout + fanout + 1),
            &doc,
            |b, doc| {
                b.iter(|| {
                    let _ = black_box(serializer.serialize(black_box(doc), &options));
                });
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let doc = generate_graph(50);
    let bom = match CycloneDxSerializer::default().serialize(&doc, &SerializeOptions::default()) {
        Ok(conversion) => conversion.into_document(),
        Err(err) => panic!("benchmark graph failed to convert: {err}"),
    };
    let mut group = c.benchmark_group("render");

    for (version, encoding) in [("1.6", "json"), ("1.6", "xml"), ("1.4", "json")] {
        let encoder = BomEncoder::new(version, encoding);
        group.bench_function(format!("{encoding}_{version}"), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(1 << 20);
                let _ = black_box(encoder.encode(black_box(&bom), &mut out));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize, bench_render);
criterion_main!(benches);
