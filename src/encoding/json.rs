//! CycloneDX JSON writer.

use super::version::SpecVersion;
use crate::error::EncodeErrorKind;
use crate::model::Bom;
use serde::Serialize;
use std::io::Write;

/// Top-level JSON object: format markers followed by the document fields
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    bom_format: &'static str,
    spec_version: &'static str,
    #[serde(flatten)]
    bom: &'a Bom,
}

/// Write `bom` as pretty-printed JSON for `version`
pub fn write_json(
    bom: &Bom,
    version: SpecVersion,
    writer: &mut dyn Write,
) -> Result<(), EncodeErrorKind> {
    let envelope = Envelope {
        bom_format: "CycloneDX",
        spec_version: version.as_str(),
        bom,
    };
    serde_json::to_writer_pretty(&mut *writer, &envelope)
        .map_err(|e| EncodeErrorKind::Json(e.to_string()))?;
    writer.write_all(b"\n")?;
    Ok(())
}
