//! Removal of synthetic references injected at ingestion time.

use crate::model::{Component, Dependency};
use crate::serializers::degradation::{DegradationKind, DegradationReport};

/// Prefix the ingestion step uses for generated references
pub const DEFAULT_AUTO_REF_PREFIX: &str = "protobom-";

/// Marker carried by the prefix segment of a generated reference
const AUTO_MARKER: &str = "-auto";

/// Segment delimiter inside a generated reference
const SEGMENT_DELIMITER: &str = "--";

/// Whether `bom_ref` looks like a reference generated at ingestion time.
///
/// A generated reference starts with `prefix` and its first `--`-delimited
/// segment contains `-auto`, e.g. `protobom-auto--000000042`.
#[must_use]
pub fn is_auto_ref(bom_ref: &str, prefix: &str) -> bool {
    if prefix.is_empty() || !bom_ref.starts_with(prefix) {
        return false;
    }
    bom_ref
        .split(SEGMENT_DELIMITER)
        .next()
        .is_some_and(|segment| segment.contains(AUTO_MARKER))
}

/// Clear generated references in `components` and all their descendants.
///
/// Returns the number of references cleared. Running it twice is a no-op the
/// second time.
pub fn strip_auto_refs(components: &mut [Component], prefix: &str) -> usize {
    let mut cleared = 0;
    for component in components.iter_mut() {
        if is_auto_ref(&component.bom_ref, prefix) {
            component.bom_ref.clear();
            cleared += 1;
        }
        cleared += strip_auto_refs(&mut component.components, prefix);
    }
    cleared
}

/// Report dependency records that still name a generated reference.
///
/// Dependency references are kept as they are, so such a record points at a
/// component whose reference was cleared, or at no component at all.
pub fn report_synthetic_dependencies(
    dependencies: &[Dependency],
    prefix: &str,
    report: &mut DegradationReport,
) {
    for dependency in dependencies {
        let synthetic: Vec<&str> = std::iter::once(&dependency.reference)
            .chain(&dependency.depends_on)
            .filter(|r| is_auto_ref(r, prefix))
            .map(String::as_str)
            .collect();
        if !synthetic.is_empty() {
            report.node(
                DegradationKind::SyntheticDependencyReference,
                dependency.reference.as_str(),
                format!(
                    "dependency record names generated reference(s) {} that no component carries",
                    synthetic.join(", ")
                ),
            );
        }
    }
}
