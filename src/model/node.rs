//! Graph nodes and edges of the generic SBOM model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entity (package, file, ...) in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    /// Identifier, unique within the document
    pub id: String,
    /// Node kind
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    pub version: String,
    pub description: String,
    /// Free-text classification ("library", "application", ...)
    pub primary_purpose: String,
    /// License identifiers or expressions
    pub licenses: Vec<String>,
    /// Digests keyed by algorithm
    pub hashes: IndexMap<HashAlgorithm, String>,
    pub external_references: Vec<ExternalReference>,
    /// Software identifiers keyed by kind
    pub identifiers: IndexMap<SoftwareIdentifierType, String>,
    pub suppliers: Vec<Person>,
    pub copyright: String,
}

impl Node {
    /// Create a node with an id and a name
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the primary purpose
    #[must_use]
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.primary_purpose = purpose.into();
        self
    }

    /// Set the node kind
    #[must_use]
    pub const fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a digest
    #[must_use]
    pub fn with_hash(mut self, algorithm: HashAlgorithm, digest: impl Into<String>) -> Self {
        self.hashes.insert(algorithm, digest.into());
        self
    }

    /// Add a software identifier
    #[must_use]
    pub fn with_identifier(
        mut self,
        kind: SoftwareIdentifierType,
        value: impl Into<String>,
    ) -> Self {
        self.identifiers.insert(kind, value.into());
        self
    }

    /// Add a supplier
    #[must_use]
    pub fn with_supplier(mut self, supplier: Person) -> Self {
        self.suppliers.push(supplier);
        self
    }

    /// Add a license
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.licenses.push(license.into());
        self
    }
}

/// Node kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    #[default]
    Package,
    File,
}

/// Hash algorithms known to the graph model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    Sha384,
    #[serde(rename = "SHA512")]
    Sha512,
    #[serde(rename = "SHA3_256")]
    Sha3_256,
    #[serde(rename = "SHA3_384")]
    Sha3_384,
    #[serde(rename = "SHA3_512")]
    Sha3_512,
    #[serde(rename = "BLAKE2B_256")]
    Blake2b256,
    #[serde(rename = "BLAKE2B_384")]
    Blake2b384,
    #[serde(rename = "BLAKE2B_512")]
    Blake2b512,
    #[serde(rename = "BLAKE3")]
    Blake3,
    #[serde(rename = "MD2")]
    Md2,
    #[serde(rename = "ADLER32")]
    Adler32,
    #[serde(rename = "MD4")]
    Md4,
    #[serde(rename = "MD6")]
    Md6,
    #[serde(rename = "SHA224")]
    Sha224,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "UNKNOWN",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha3_256 => "SHA3_256",
            Self::Sha3_384 => "SHA3_384",
            Self::Sha3_512 => "SHA3_512",
            Self::Blake2b256 => "BLAKE2B_256",
            Self::Blake2b384 => "BLAKE2B_384",
            Self::Blake2b512 => "BLAKE2B_512",
            Self::Blake3 => "BLAKE3",
            Self::Md2 => "MD2",
            Self::Adler32 => "ADLER32",
            Self::Md4 => "MD4",
            Self::Md6 => "MD6",
            Self::Sha224 => "SHA224",
        };
        f.write_str(name)
    }
}

/// Software identifier kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoftwareIdentifierType {
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(rename = "PURL")]
    Purl,
    #[serde(rename = "CPE22")]
    Cpe22,
    #[serde(rename = "CPE23")]
    Cpe23,
    #[serde(rename = "GITOID")]
    Gitoid,
}

impl std::fmt::Display for SoftwareIdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Purl => write!(f, "PURL"),
            Self::Cpe22 => write!(f, "CPE22"),
            Self::Cpe23 => write!(f, "CPE23"),
            Self::Gitoid => write!(f, "GITOID"),
        }
    }
}

/// External reference attached to a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReference {
    /// Reference kind ("vcs", "website", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl ExternalReference {
    #[must_use]
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
        }
    }
}

/// A person or organization (authors, suppliers, contacts)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub name: String,
    pub is_org: bool,
    pub email: String,
    pub url: String,
    pub phone: String,
    pub contacts: Vec<Person>,
}

impl Person {
    /// Create a person with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an organization with just a name
    #[must_use]
    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_org: true,
            ..Self::default()
        }
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Add a contact
    #[must_use]
    pub fn with_contact(mut self, contact: Self) -> Self {
        self.contacts.push(contact);
        self
    }
}

/// Directed, typed relationship from one node to one or more nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Source node id
    pub from: String,
    /// Relationship kind
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
    /// Target node ids, in order
    #[serde(default)]
    pub to: Vec<String>,
}

impl Edge {
    #[must_use]
    pub fn new<I, S>(from: impl Into<String>, kind: RelationshipKind, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            kind,
            to: to.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --{}--> [{}]", self.from, self.kind, self.to.join(", "))
    }
}

/// Relationship kinds of the graph model.
///
/// Only `Contains` and `DependsOn` have a structural meaning in the tree
/// representation; every other kind is reported as a degradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum RelationshipKind {
    Amends,
    Ancestor,
    BuildDependency,
    BuildTool,
    Contains,
    #[serde(rename = "contained_by")]
    ContainedBy,
    Copy,
    DataFile,
    DependencyManifest,
    DependsOn,
    DependencyOf,
    Descendant,
    Describes,
    DescribedBy,
    DevDependency,
    DevTool,
    DistributionArtifact,
    Documentation,
    DynamicLink,
    Example,
    ExpandedFromArchive,
    FileAdded,
    FileDeleted,
    FileModified,
    Generates,
    GeneratedFrom,
    Metafile,
    OptionalComponent,
    OptionalDependency,
    Packages,
    Patch,
    Prerequisite,
    PrerequisiteFor,
    ProvidedDependency,
    RequirementFor,
    RuntimeDependency,
    SpecificationFor,
    StaticLink,
    Test,
    TestCase,
    TestDependency,
    TestTool,
    Variant,
    /// Explicit "other" relationship, or any value this model does not know
    #[serde(other)]
    Other,
}

impl RelationshipKind {
    /// Wire name of the relationship kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Amends => "amends",
            Self::Ancestor => "ancestor",
            Self::BuildDependency => "buildDependency",
            Self::BuildTool => "buildTool",
            Self::Contains => "contains",
            Self::ContainedBy => "contained_by",
            Self::Copy => "copy",
            Self::DataFile => "dataFile",
            Self::DependencyManifest => "dependencyManifest",
            Self::DependsOn => "dependsOn",
            Self::DependencyOf => "dependencyOf",
            Self::Descendant => "descendant",
            Self::Describes => "describes",
            Self::DescribedBy => "describedBy",
            Self::DevDependency => "devDependency",
            Self::DevTool => "devTool",
            Self::DistributionArtifact => "distributionArtifact",
            Self::Documentation => "documentation",
            Self::DynamicLink => "dynamicLink",
            Self::Example => "example",
            Self::ExpandedFromArchive => "expandedFromArchive",
            Self::FileAdded => "fileAdded",
            Self::FileDeleted => "fileDeleted",
            Self::FileModified => "fileModified",
            Self::Generates => "generates",
            Self::GeneratedFrom => "generatedFrom",
            Self::Metafile => "metafile",
            Self::OptionalComponent => "optionalComponent",
            Self::OptionalDependency => "optionalDependency",
            Self::Packages => "packages",
            Self::Patch => "patch",
            Self::Prerequisite => "prerequisite",
            Self::PrerequisiteFor => "prerequisiteFor",
            Self::ProvidedDependency => "providedDependency",
            Self::RequirementFor => "requirementFor",
            Self::RuntimeDependency => "runtimeDependency",
            Self::SpecificationFor => "specificationFor",
            Self::StaticLink => "staticLink",
            Self::Test => "test",
            Self::TestCase => "testCase",
            Self::TestDependency => "testDependency",
            Self::TestTool => "testTool",
            Self::Variant => "variant",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
