#![no_main]
use bomtree::{BomEncoder, CycloneDxSerializer, Document, SerializeOptions};
use libfuzzer_sys::fuzz_target;

/// Fuzz the whole conversion: graph JSON in, CycloneDX JSON and XML out.
///
/// Any input that deserializes into a document must either convert or fail
/// with an error, never panic, and a converted document must always render.
fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<Document>(data) else {
        return;
    };

    let serializer = CycloneDxSerializer::default();
    let Ok(conversion) = serializer.serialize(&doc, &SerializeOptions::default()) else {
        return;
    };

    for encoding in ["json", "xml"] {
        let mut out = Vec::new();
        let _ = BomEncoder::new("1.6", encoding).encode(&conversion.document, &mut out);
        let _ = BomEncoder::new("1.3", encoding).encode(&conversion.document, &mut out);
    }
});
