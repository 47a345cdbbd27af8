#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use svdf::{Ignore, LookupError, ParseOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    data: Vec<u8>,
    path: Vec<String>,
}

fuzz_target!(|input: Input| {
    let Ok(doc) = svdf::parse_with(&input.data, &ParseOptions::default(), &mut Ignore) else {
        return;
    };
    let path = &input.path[..input.path.len().min(8)];

    assert_eq!(doc.has_string(path), doc.lookup_string(path).is_ok());
    assert_eq!(doc.has_node(path), doc.lookup_node(path).is_ok());

    match doc.lookup_value(path) {
        Ok(_) => {}
        Err(LookupError::UnknownKey { path: p }) => assert!(!p.is_empty() && p.len() <= path.len()),
        Err(LookupError::NotANode { path: p, .. }) => assert!(p.len() < path.len()),
        Err(LookupError::NotALeaf { .. }) => unreachable!("lookup_value never rejects nodes"),
    }
});
