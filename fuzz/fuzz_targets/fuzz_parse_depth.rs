#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use svdf::{Ignore, ParseErrorKind, ParseOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    max_depth: u8,
    nesting: u16,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let limit = usize::from(input.max_depth % 64);
    let opts = ParseOptions::default().with_max_depth(Some(limit));

    let mut text = b"\"r\"".to_vec();
    for _ in 0..input.nesting % 256 {
        text.extend_from_slice(b"\n{\n\"k\"");
    }
    text.extend_from_slice(&input.data);

    if let Err(e) = svdf::parse_with(&text, &opts, &mut Ignore) {
        if let ParseErrorKind::DepthLimitExceeded { limit: reported } = e.kind {
            assert_eq!(reported, limit);
        }
    }
});
