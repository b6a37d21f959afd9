//! CycloneDX XML writer.
//!
//! Elements are emitted in schema sequence order; empty optional fields are
//! omitted.

use super::version::SpecVersion;
use crate::error::EncodeErrorKind;
use crate::model::{
    Bom, BomMetadata, Component, Dependency, Lifecycle, LicenseChoice, OrganizationalContact,
    OrganizationalEntity,
};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

type XmlResult = Result<(), EncodeErrorKind>;

struct XmlOut<'w> {
    writer: Writer<&'w mut dyn Write>,
}

impl<'w> XmlOut<'w> {
    fn new(inner: &'w mut dyn Write) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> XmlResult {
        self.writer
            .write_event(event)
            .map_err(|e| EncodeErrorKind::Xml(e.to_string()))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> XmlResult {
        let mut element = BytesStart::new(name);
        for attr in attrs {
            element.push_attribute(*attr);
        }
        self.event(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> XmlResult {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> XmlResult {
        let mut element = BytesStart::new(name);
        for attr in attrs {
            element.push_attribute(*attr);
        }
        self.event(Event::Empty(element))
    }

    /// `<name>text</name>`, skipped when `text` is empty
    fn text(&mut self, name: &str, text: &str) -> XmlResult {
        if text.is_empty() {
            return Ok(());
        }
        self.text_with(name, &[], text)
    }

    fn text_with(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> XmlResult {
        self.start(name, attrs)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }
}

/// Write `bom` as indented XML for `version`
pub fn write_xml(bom: &Bom, version: SpecVersion, writer: &mut dyn Write) -> XmlResult {
    let mut out = XmlOut::new(writer);
    out.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let namespace = version.xml_namespace();
    let bom_version = bom.version.to_string();
    let mut attrs = vec![("xmlns", namespace.as_str())];
    if !bom.serial_number.is_empty() {
        attrs.push(("serialNumber", bom.serial_number.as_str()));
    }
    attrs.push(("version", bom_version.as_str()));
    out.start("bom", &attrs)?;

    write_metadata(&mut out, &bom.metadata)?;

    if !bom.components.is_empty() {
        out.start("components", &[])?;
        for component in &bom.components {
            write_component(&mut out, component)?;
        }
        out.end("components")?;
    }

    if !bom.dependencies.is_empty() {
        out.start("dependencies", &[])?;
        for dependency in &bom.dependencies {
            write_dependency(&mut out, dependency)?;
        }
        out.end("dependencies")?;
    }

    out.end("bom")?;
    out.writer.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_metadata(out: &mut XmlOut<'_>, metadata: &BomMetadata) -> XmlResult {
    out.start("metadata", &[])?;

    if let Some(timestamp) = &metadata.timestamp {
        out.text(
            "timestamp",
            &timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        )?;
    }

    if !metadata.lifecycles.is_empty() {
        out.start("lifecycles", &[])?;
        for lifecycle in &metadata.lifecycles {
            out.start("lifecycle", &[])?;
            match lifecycle {
                Lifecycle::Phase { phase } => out.text("phase", phase.as_str())?,
                Lifecycle::Named { name, description } => {
                    out.text_with("name", &[], name)?;
                    out.text("description", description)?;
                }
            }
            out.end("lifecycle")?;
        }
        out.end("lifecycles")?;
    }

    if !metadata.tools.is_empty() {
        out.start("tools", &[])?;
        for tool in &metadata.tools {
            out.start("tool", &[])?;
            out.text("vendor", &tool.vendor)?;
            out.text("name", &tool.name)?;
            out.text("version", &tool.version)?;
            out.end("tool")?;
        }
        out.end("tools")?;
    }

    if !metadata.authors.is_empty() {
        out.start("authors", &[])?;
        for author in &metadata.authors {
            write_contact(out, "author", author)?;
        }
        out.end("authors")?;
    }

    if let Some(root) = &metadata.component {
        write_component(out, root)?;
    }

    out.end("metadata")
}

fn write_contact(out: &mut XmlOut<'_>, element: &str, contact: &OrganizationalContact) -> XmlResult {
    out.start(element, &[])?;
    out.text("name", &contact.name)?;
    out.text("email", &contact.email)?;
    out.text("phone", &contact.phone)?;
    out.end(element)
}

fn write_supplier(out: &mut XmlOut<'_>, supplier: &OrganizationalEntity) -> XmlResult {
    out.start("supplier", &[])?;
    out.text("name", &supplier.name)?;
    for url in &supplier.url {
        out.text("url", url)?;
    }
    for contact in &supplier.contact {
        write_contact(out, "contact", contact)?;
    }
    out.end("supplier")
}

fn write_component(out: &mut XmlOut<'_>, component: &Component) -> XmlResult {
    let mut attrs = vec![("type", component.wire_type().as_str())];
    if !component.bom_ref.is_empty() {
        attrs.push(("bom-ref", component.bom_ref.as_str()));
    }
    out.start("component", &attrs)?;

    if let Some(supplier) = &component.supplier {
        write_supplier(out, supplier)?;
    }
    out.text_with("name", &[], &component.name)?;
    out.text("version", &component.version)?;
    out.text("description", &component.description)?;

    if !component.hashes.is_empty() {
        out.start("hashes", &[])?;
        for hash in &component.hashes {
            out.text_with("hash", &[("alg", hash.algorithm.as_str())], &hash.content)?;
        }
        out.end("hashes")?;
    }

    if !component.licenses.is_empty() {
        out.start("licenses", &[])?;
        for choice in &component.licenses {
            match choice {
                LicenseChoice::License(license) => {
                    out.start("license", &[])?;
                    if let Some(id) = &license.id {
                        out.text("id", id)?;
                    }
                    if let Some(name) = &license.name {
                        out.text("name", name)?;
                    }
                    out.end("license")?;
                }
                LicenseChoice::Expression(expression) => out.text("expression", expression)?,
            }
        }
        out.end("licenses")?;
    }

    out.text("copyright", &component.copyright)?;
    out.text("cpe", &component.cpe)?;
    out.text("purl", &component.purl)?;

    if !component.external_references.is_empty() {
        out.start("externalReferences", &[])?;
        for reference in &component.external_references {
            out.start("reference", &[("type", reference.ref_type.as_str())])?;
            out.text_with("url", &[], &reference.url)?;
            out.end("reference")?;
        }
        out.end("externalReferences")?;
    }

    if !component.components.is_empty() {
        out.start("components", &[])?;
        for child in &component.components {
            write_component(out, child)?;
        }
        out.end("components")?;
    }

    out.end("component")
}

fn write_dependency(out: &mut XmlOut<'_>, dependency: &Dependency) -> XmlResult {
    let source = [("ref", dependency.reference.as_str())];
    if dependency.depends_on.is_empty() {
        return out.empty("dependency", &source);
    }
    out.start("dependency", &source)?;
    for target in &dependency.depends_on {
        out.empty("dependency", &[("ref", target.as_str())])?;
    }
    out.end("dependency")
}
