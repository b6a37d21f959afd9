//! CycloneDX component records: the nodes of the output tree.

use serde::{Serialize, Serializer};

/// CycloneDX component.
///
/// Child components are owned values: attaching a component somewhere in the
/// tree stores a copy, never a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unset when unknown; written as [`DEFAULT_COMPONENT_TYPE`]
    #[serde(rename = "type", serialize_with = "serialize_type")]
    pub component_type: Option<ComponentType>,
    /// Document-unique reference; empty when cleared
    #[serde(rename = "bom-ref", skip_serializing_if = "String::is_empty")]
    pub bom_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<OrganizationalEntity>,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hashes: Vec<Hash>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<LicenseChoice>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub copyright: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cpe: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub purl: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<CdxExternalReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Component {
    /// Create a component with a reference and a name
    #[must_use]
    pub fn new(bom_ref: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bom_ref: bom_ref.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Type as written on the wire.
    ///
    /// The CycloneDX schema requires a type on every component, so an unset
    /// type is written as [`DEFAULT_COMPONENT_TYPE`].
    #[must_use]
    pub fn wire_type(&self) -> ComponentType {
        self.component_type.unwrap_or(DEFAULT_COMPONENT_TYPE)
    }

    /// Visit this component and every nested component, pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in &self.components {
            child.walk(visit);
        }
    }

    /// Number of components in this subtree, including this one
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.components.iter().map(Self::subtree_len).sum::<usize>()
    }

    /// Find a component in this subtree by reference
    #[must_use]
    pub fn find(&self, bom_ref: &str) -> Option<&Self> {
        if self.bom_ref == bom_ref {
            return Some(self);
        }
        self.components.iter().find_map(|c| c.find(bom_ref))
    }
}

#[allow(clippy::ref_option)]
fn serialize_type<S: Serializer>(
    component_type: &Option<ComponentType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    component_type
        .unwrap_or(DEFAULT_COMPONENT_TYPE)
        .serialize(serializer)
}

/// Type written for components whose type is unset
pub const DEFAULT_COMPONENT_TYPE: ComponentType = ComponentType::Library;

/// Component type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Application,
    Container,
    Data,
    Device,
    DeviceDriver,
    File,
    Firmware,
    Framework,
    Library,
    MachineLearningModel,
    OperatingSystem,
    Platform,
}

impl ComponentType {
    /// Wire name of the type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Container => "container",
            Self::Data => "data",
            Self::Device => "device",
            Self::DeviceDriver => "device-driver",
            Self::File => "file",
            Self::Firmware => "firmware",
            Self::Framework => "framework",
            Self::Library => "library",
            Self::MachineLearningModel => "machine-learning-model",
            Self::OperatingSystem => "operating-system",
            Self::Platform => "platform",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// License choice: a single license or an SPDX expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseChoice {
    License(License),
    Expression(String),
}

/// A single license, by SPDX id or by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Cryptographic hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hash {
    #[serde(rename = "alg")]
    pub algorithm: CdxHashAlgorithm,
    pub content: String,
}

impl Hash {
    #[must_use]
    pub const fn new(algorithm: CdxHashAlgorithm, content: String) -> Self {
        Self { algorithm, content }
    }
}

/// Hash algorithms supported by CycloneDX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CdxHashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
}

impl CdxHashAlgorithm {
    /// Wire name of the algorithm
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b256 => "BLAKE2b-256",
            Self::Blake2b384 => "BLAKE2b-384",
            Self::Blake2b512 => "BLAKE2b-512",
            Self::Blake3 => "BLAKE3",
        }
    }
}

impl std::fmt::Display for CdxHashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CdxHashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// External reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CdxExternalReference {
    /// Reference type, copied verbatim from the source document
    #[serde(rename = "type")]
    pub ref_type: String,
    pub url: String,
}

/// Organization/supplier information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationalEntity {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<OrganizationalContact>,
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationalContact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
}
