#![no_main]
use libfuzzer_sys::fuzz_target;
use svdf::{ParseOptions, Warning};

fuzz_target!(|data: &[u8]| {
    let mut warnings: Vec<Warning> = Vec::new();
    match svdf::parse_with(data, &ParseOptions::default(), &mut warnings) {
        Ok(doc) => {
            let _ = doc.to_json();
        }
        Err(e) => {
            assert!(e.position.offset <= data.len());
        }
    }
    for w in &warnings {
        assert!(w.position.offset <= data.len());
    }
});
