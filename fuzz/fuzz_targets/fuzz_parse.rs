#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes: parsing must never panic, the cheap validator must agree
// with the full parse, and an accepted document renders to text that parses
// back to the same shape.
fuzz_target!(|data: &[u8]| {
    let parsed = laxjson::Document::parse(data);
    let validated = laxjson::validate(data);
    assert_eq!(parsed.as_ref().err(), validated.as_ref().err());

    if let Ok(doc) = parsed {
        let text = doc.render(laxjson::RenderOptions::default());
        let again = laxjson::Document::parse(&text).unwrap_or_else(|e| panic!("{e}\n{text}"));
        assert_eq!(again.tree().node_count(), doc.tree().node_count());
    }
});
