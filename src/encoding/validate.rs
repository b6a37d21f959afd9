//! Structural checks run before a document is written.

use crate::error::EncodeErrorKind;
use crate::model::Bom;
use serde_json::Value;
use std::collections::HashSet;

/// Check that every non-empty component reference is unique and that every
/// dependency names its source.
pub fn validate(bom: &Bom) -> Result<(), EncodeErrorKind> {
    let mut seen = HashSet::new();
    let mut duplicate = None;
    bom.walk_components(&mut |component| {
        if duplicate.is_none()
            && !component.bom_ref.is_empty()
            && !seen.insert(component.bom_ref.as_str())
        {
            duplicate = Some(component.bom_ref.clone());
        }
    });
    if let Some(bom_ref) = duplicate {
        return Err(EncodeErrorKind::InvalidDocument(format!(
            "duplicate bom-ref '{bom_ref}'"
        )));
    }

    if let Some(index) = bom
        .dependencies
        .iter()
        .position(|d| d.reference.is_empty())
    {
        return Err(EncodeErrorKind::InvalidDocument(format!(
            "dependency #{index} has an empty ref"
        )));
    }

    Ok(())
}

/// Check that every string in the document can be written as XML 1.0.
///
/// Markup characters are escaped by the writer. Control characters other than
/// tab, line feed and carriage return, and U+FFFE/U+FFFF, cannot be written
/// at all.
pub fn validate_xml_chars(bom: &Bom) -> Result<(), EncodeErrorKind> {
    let value = serde_json::to_value(bom).map_err(|e| EncodeErrorKind::Json(e.to_string()))?;
    match first_non_xml_char(&value) {
        Some((c, text)) => Err(EncodeErrorKind::InvalidDocument(format!(
            "character U+{:04X} in '{}' cannot be written as XML",
            u32::from(c),
            text.escape_debug()
        ))),
        None => Ok(()),
    }
}

fn first_non_xml_char(value: &Value) -> Option<(char, &str)> {
    match value {
        Value::String(text) => text
            .chars()
            .find(|c| !is_xml_char(*c))
            .map(|c| (c, text.as_str())),
        Value::Array(items) => items.iter().find_map(first_non_xml_char),
        Value::Object(fields) => fields.values().find_map(first_non_xml_char),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
