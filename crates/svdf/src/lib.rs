#![doc = include_str!("../README.md")]

pub mod access;
pub mod decode;
pub mod document;
pub mod error;
pub mod options;
pub mod report;
pub mod value;

#[cfg(feature = "serde")]
pub mod ser;

pub use crate::decode::validation::{Ignore, LogWarnings, Warning, WarningSink};
pub use crate::document::{Document, SourceInfo};
pub use crate::error::{Error, KeyPath, LookupError, ParseError, ParseErrorKind, Position, Result};
pub use crate::options::{DEFAULT_MAX_DEPTH, ParseOptions, RenderOptions, Verbosity};
pub use crate::value::{Node, Value};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a buffer with default options; warnings are logged through `tracing`.
pub fn parse(input: &[u8]) -> core::result::Result<Document, ParseError> {
    parse_with(input, &ParseOptions::default(), &mut LogWarnings)
}

pub fn parse_with(
    input: &[u8],
    options: &ParseOptions,
    sink: &mut dyn WarningSink,
) -> core::result::Result<Document, ParseError> {
    decode::parse_document(input, SourceInfo::default(), options, sink)
}

/// Read and parse a file, recording its path, modification time and size in the document.
pub fn from_file<P: AsRef<Path>>(path: P, options: &ParseOptions, sink: &mut dyn WarningSink) -> Result<Document> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| Error::io("open", path, e))?;
    let meta = file.metadata().map_err(|e| Error::io("examine", path, e))?;
    let mut buf = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or(0));
    file.read_to_end(&mut buf).map_err(|e| Error::io("read", path, e))?;

    let source = SourceInfo {
        path: Some(path.to_path_buf()),
        modified_at: meta.modified().ok(),
        byte_size: Some(meta.len()),
    };
    let doc = decode::parse_document(&buf, source, options, sink)?;
    Ok(doc)
}
