//! Decoding pipeline: scanner -> recursive-descent parser, with the layout validator alongside

pub mod parser;
pub mod scanner;
pub mod validation;

pub use parser::{Parser, parse_collecting, parse_document};
