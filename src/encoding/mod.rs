//! CycloneDX encoder: writes a [`Bom`] as JSON or XML for a given version.
//!
//! Version and encoding are plain strings, validated when a document is
//! encoded, so an invalid configuration surfaces as an encode error.
//!
//! ```
//! use bomtree::encoding::BomEncoder;
//! use bomtree::model::Bom;
//!
//! let mut out = Vec::new();
//! BomEncoder::new("1.5", "json").encode(&Bom::default(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("\"specVersion\": \"1.5\""));
//! ```

mod json;
mod validate;
mod version;
mod xml;

pub use validate::{validate, validate_xml_chars};
pub use version::{Encoding, SpecVersion, downgrade};

use crate::error::{BomTreeError, Result};
use crate::model::Bom;
use std::io::Write;

/// Encoder bound to one version and encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomEncoder {
    version: String,
    encoding: String,
}

impl BomEncoder {
    #[must_use]
    pub fn new(version: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            encoding: encoding.into(),
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Parse the configured version and encoding
    pub fn resolve(&self) -> Result<(SpecVersion, Encoding)> {
        let version = SpecVersion::parse(&self.version)
            .map_err(|e| BomTreeError::encode("parsing CycloneDX version", e))?;
        let encoding = Encoding::parse(&self.encoding)
            .map_err(|e| BomTreeError::encode("parsing CycloneDX encoding", e))?;
        Ok((version, encoding))
    }

    /// Validate `bom` and write it pretty-printed to `writer`.
    ///
    /// Nothing is written when the configuration or the document is invalid.
    pub fn encode(&self, bom: &Bom, writer: &mut dyn Write) -> Result<()> {
        let (version, encoding) = self.resolve()?;
        validate(bom).map_err(|e| BomTreeError::encode("validating document", e))?;
        if encoding == Encoding::Xml {
            validate_xml_chars(bom).map_err(|e| BomTreeError::encode("validating document", e))?;
        }

        let bom = downgrade(bom, version);
        let written = match encoding {
            Encoding::Json => json::write_json(&bom, version, writer),
            Encoding::Xml => xml::write_xml(&bom, version, writer),
        };
        written.map_err(|e| {
            BomTreeError::encode(format!("writing CycloneDX {version} {encoding}"), e)
        })?;

        tracing::debug!(
            version = %version,
            encoding = %encoding,
            components = bom.component_count(),
            "Encoded CycloneDX document"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeErrorKind;
    use crate::model::Component;

    #[test]
    fn test_unsupported_version_writes_nothing() {
        let mut out = Vec::new();
        let err = BomEncoder::new("1.9", "json")
            .encode(&Bom::default(), &mut out)
            .expect_err("unsupported");
        assert!(matches!(
            err,
            BomTreeError::Encode {
                source: EncodeErrorKind::UnsupportedVersion { .. },
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unsupported_encoding() {
        let mut out = Vec::new();
        let err = BomEncoder::new("1.5", "yaml")
            .encode(&Bom::default(), &mut out)
            .expect_err("unsupported");
        assert!(err.is_encode_error());
        assert!(err.to_string().contains("encoding"));
    }

    #[test]
    fn test_invalid_document_rejected() {
        let mut bom = Bom::default();
        bom.components.push(Component::new("dup", "a"));
        bom.components.push(Component::new("dup", "b"));
        let mut out = Vec::new();
        let err = BomEncoder::new("1.5", "xml")
            .encode(&bom, &mut out)
            .expect_err("duplicate refs");
        assert!(matches!(
            err,
            BomTreeError::Encode {
                source: EncodeErrorKind::InvalidDocument(_),
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_control_character_rejected_for_xml_only() {
        let mut bom = Bom::default();
        bom.components.push(Component::new("a", "bad\u{1}name"));

        let mut out = Vec::new();
        let err = BomEncoder::new("1.6", "xml")
            .encode(&bom, &mut out)
            .expect_err("not well-formed");
        assert!(matches!(
            err,
            BomTreeError::Encode {
                source: EncodeErrorKind::InvalidDocument(_),
                ..
            }
        ));
        assert!(out.is_empty());

        // JSON escapes control characters
        BomEncoder::new("1.6", "json")
            .encode(&bom, &mut out)
            .expect("encoded");
        assert!(String::from_utf8(out).expect("utf-8").contains("bad\\u0001name"));
    }

    #[test]
    fn test_encoding_is_case_insensitive() {
        let mut out = Vec::new();
        BomEncoder::new("v1.6", "XML")
            .encode(&Bom::default(), &mut out)
            .expect("encoded");
        assert!(String::from_utf8(out).expect("utf-8").contains("schema/bom/1.6"));
    }
}
