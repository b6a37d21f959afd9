//! Entity mapper: one graph node to one CycloneDX component.
//!
//! Every vocabulary translation here is an explicit `match` table with an
//! explicit branch for values that have no CycloneDX counterpart. Those
//! branches record a degradation instead of failing.

use crate::model::{
    CdxExternalReference, CdxHashAlgorithm, Component, ComponentType, Hash, HashAlgorithm,
    License, LicenseChoice, Node, NodeKind, OrganizationalContact, OrganizationalEntity, Person,
    SoftwareIdentifierType,
};
use crate::serializers::degradation::{DegradationKind, DegradationReport};
use packageurl::PackageUrl;
use std::str::FromStr;

/// External reference types defined by CycloneDX 1.6
pub const EXTERNAL_REFERENCE_TYPES: &[&str] = &[
    "vcs",
    "issue-tracker",
    "website",
    "advisories",
    "bom",
    "mailing-list",
    "social",
    "chat",
    "documentation",
    "support",
    "source-distribution",
    "distribution",
    "distribution-intake",
    "license",
    "build-meta",
    "build-system",
    "release-notes",
    "security-contact",
    "model-card",
    "log",
    "configuration",
    "evidence",
    "formulation",
    "attestation",
    "threat-model",
    "adversary-model",
    "risk-assessment",
    "vulnerability-assertion",
    "exploitability-statement",
    "pentest-report",
    "static-analysis-report",
    "dynamic-analysis-report",
    "runtime-analysis-report",
    "component-analysis-report",
    "maturity-report",
    "certification-report",
    "codified-infrastructure",
    "quality-metrics",
    "poam",
    "electronic-signature",
    "digital-signature",
    "rfc-9116",
    "other",
];

/// Convert a node into a component.
///
/// Returns `None` only when the node has no id: a component without a
/// reference could never be attached or referenced.
pub fn map_node(node: &Node, report: &mut DegradationReport) -> Option<Component> {
    if node.id.is_empty() {
        return None;
    }

    let mut component = Component {
        bom_ref: node.id.clone(),
        name: node.name.clone(),
        version: node.version.clone(),
        description: node.description.clone(),
        component_type: resolve_type(node, report),
        ..Component::default()
    };

    component.licenses = node.licenses.iter().map(|l| license_choice(l)).collect();
    component.hashes = map_hashes(node, report);
    component.external_references = map_external_references(node, report);
    map_identifiers(node, &mut component, report);

    if let Some((first, rest)) = node.suppliers.split_first() {
        for extra in rest {
            report.node(
                DegradationKind::ExtraSupplier,
                &node.id,
                format!(
                    "component supports a single supplier, '{}' was dropped",
                    extra.name
                ),
            );
        }
        component.supplier = Some(organizational_entity(first));
    }

    if !node.copyright.is_empty() {
        component.copyright.clone_from(&node.copyright);
    }

    Some(component)
}

/// Resolve the component type from the node kind and primary purpose.
fn resolve_type(node: &Node, report: &mut DegradationReport) -> Option<ComponentType> {
    if node.kind == NodeKind::File {
        return Some(ComponentType::File);
    }
    if node.primary_purpose.is_empty() {
        return None;
    }

    let resolved = purpose_to_type(&node.primary_purpose);
    if resolved.is_none() {
        report.node(
            DegradationKind::UnrecognizedPurpose,
            &node.id,
            format!(
                "primary purpose '{}' has no component type",
                node.primary_purpose
            ),
        );
    }
    resolved
}

/// Match a primary purpose (case-insensitive) against the component type table
#[must_use]
pub fn purpose_to_type(purpose: &str) -> Option<ComponentType> {
    match purpose.to_lowercase().as_str() {
        "application" => Some(ComponentType::Application),
        "container" => Some(ComponentType::Container),
        "data" => Some(ComponentType::Data),
        "device" => Some(ComponentType::Device),
        "device-driver" => Some(ComponentType::DeviceDriver),
        "file" => Some(ComponentType::File),
        "firmware" => Some(ComponentType::Firmware),
        "framework" => Some(ComponentType::Framework),
        "library" => Some(ComponentType::Library),
        "machine-learning-model" => Some(ComponentType::MachineLearningModel),
        "operating-system" => Some(ComponentType::OperatingSystem),
        "platform" => Some(ComponentType::Platform),
        _ => None,
    }
}

/// Translate a graph hash algorithm to its CycloneDX equivalent
#[must_use]
pub const fn hash_algorithm(algorithm: HashAlgorithm) -> Option<CdxHashAlgorithm> {
    match algorithm {
        HashAlgorithm::Md5 => Some(CdxHashAlgorithm::Md5),
        HashAlgorithm::Sha1 => Some(CdxHashAlgorithm::Sha1),
        HashAlgorithm::Sha256 => Some(CdxHashAlgorithm::Sha256),
        HashAlgorithm::Sha384 => Some(CdxHashAlgorithm::Sha384),
        HashAlgorithm::Sha512 => Some(CdxHashAlgorithm::Sha512),
        HashAlgorithm::Sha3_256 => Some(CdxHashAlgorithm::Sha3_256),
        HashAlgorithm::Sha3_384 => Some(CdxHashAlgorithm::Sha3_384),
        HashAlgorithm::Sha3_512 => Some(CdxHashAlgorithm::Sha3_512),
        HashAlgorithm::Blake2b256 => Some(CdxHashAlgorithm::Blake2b256),
        HashAlgorithm::Blake2b384 => Some(CdxHashAlgorithm::Blake2b384),
        HashAlgorithm::Blake2b512 => Some(CdxHashAlgorithm::Blake2b512),
        HashAlgorithm::Blake3 => Some(CdxHashAlgorithm::Blake3),
        HashAlgorithm::Unknown
        | HashAlgorithm::Md2
        | HashAlgorithm::Adler32
        | HashAlgorithm::Md4
        | HashAlgorithm::Md6
        | HashAlgorithm::Sha224 => None,
    }
}

fn map_hashes(node: &Node, report: &mut DegradationReport) -> Vec<Hash> {
    let mut hashes = Vec::with_capacity(node.hashes.len());
    for (algorithm, digest) in &node.hashes {
        match hash_algorithm(*algorithm) {
            Some(mapped) => hashes.push(Hash::new(mapped, digest.clone())),
            None => report.node(
                DegradationKind::UnmappedHashAlgorithm,
                &node.id,
                format!("hash algorithm {algorithm} is not supported by CycloneDX"),
            ),
        }
    }
    hashes
}

/// Build a license choice from one license string.
///
/// Known SPDX ids go into `id`, compound SPDX expressions become an
/// `expression`, anything else is kept as a license `name`.
#[must_use]
pub fn license_choice(license: &str) -> LicenseChoice {
    let trimmed = license.trim();
    if let Some(id) = spdx::license_id(trimmed) {
        return LicenseChoice::License(License {
            id: Some(id.name.to_string()),
            name: None,
        });
    }

    let compound = trimmed.split_whitespace().nth(1).is_some();
    if compound && spdx::Expression::parse_mode(trimmed, spdx::ParseMode::LAX).is_ok() {
        return LicenseChoice::Expression(trimmed.to_string());
    }

    LicenseChoice::License(License {
        id: None,
        name: Some(license.to_string()),
    })
}

fn map_external_references(
    node: &Node,
    report: &mut DegradationReport,
) -> Vec<CdxExternalReference> {
    node.external_references
        .iter()
        .map(|er| {
            if !EXTERNAL_REFERENCE_TYPES.contains(&er.kind.as_str()) {
                report.node(
                    DegradationKind::NonStandardExternalReference,
                    &node.id,
                    format!(
                        "external reference type '{}' is not in the CycloneDX vocabulary",
                        er.kind
                    ),
                );
            }
            CdxExternalReference {
                ref_type: er.kind.clone(),
                url: er.url.clone(),
            }
        })
        .collect()
}

/// Keep PURL and one CPE; CPE 2.3 wins over CPE 2.2.
fn map_identifiers(node: &Node, component: &mut Component, report: &mut DegradationReport) {
    for (kind, value) in &node.identifiers {
        match kind {
            SoftwareIdentifierType::Purl => {
                if PackageUrl::from_str(value).is_err() {
                    report.node(
                        DegradationKind::MalformedPackageUrl,
                        &node.id,
                        format!("package URL '{value}' does not parse"),
                    );
                }
                component.purl.clone_from(value);
            }
            SoftwareIdentifierType::Cpe23 | SoftwareIdentifierType::Cpe22 => {}
            SoftwareIdentifierType::Unknown | SoftwareIdentifierType::Gitoid => {
                report.node(
                    DegradationKind::DroppedIdentifier,
                    &node.id,
                    format!("identifier of kind {kind} has no CycloneDX field"),
                );
            }
        }
    }

    let cpe23 = node.identifiers.get(&SoftwareIdentifierType::Cpe23);
    let cpe22 = node.identifiers.get(&SoftwareIdentifierType::Cpe22);
    match (cpe23, cpe22) {
        (Some(v23), Some(v22)) => {
            component.cpe.clone_from(v23);
            report.node(
                DegradationKind::ShadowedCpe,
                &node.id,
                format!("only one CPE is supported, CPE 2.2 '{v22}' was dropped"),
            );
        }
        (Some(v23), None) => component.cpe.clone_from(v23),
        (None, Some(v22)) => component.cpe.clone_from(v22),
        (None, None) => {}
    }
}

fn organizational_entity(supplier: &Person) -> OrganizationalEntity {
    OrganizationalEntity {
        name: supplier.name.clone(),
        url: if supplier.url.is_empty() {
            Vec::new()
        } else {
            vec![supplier.url.clone()]
        },
        contact: supplier.contacts.iter().map(contact).collect(),
    }
}

/// Map a person to a contact (name, email, phone)
#[must_use]
pub fn contact(person: &Person) -> OrganizationalContact {
    OrganizationalContact {
        name: person.name.clone(),
        email: person.email.clone(),
        phone: person.phone.clone(),
    }
}
