use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A location in the input buffer.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The root name did not start with a double quote.
    ExpectedToken,
    /// A value or member name was expected but something else was found.
    UnexpectedToken,
    UnterminatedString,
    BadEscape,
    UnexpectedEof,
    WrongRootName {
        actual: String,
        expected: Vec<String>,
    },
    DepthLimitExceeded {
        limit: usize,
    },
}

/// A fatal problem with the input. No document is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {}, column {}: {diagnostic}", .position.line, .position.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
    /// The character at `position`, if any.
    pub found: Option<char>,
    pub diagnostic: String,
    /// File the input came from, when the caller supplied one.
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub(crate) fn with_path(mut self, path: Option<&Path>) -> Self {
        if self.path.is_none() {
            self.path = path.map(Path::to_path_buf);
        }
        self
    }
}

/// Failure of a path lookup on a parsed document.
///
/// Paths are the keys walked from the root; an empty path names the root value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// `path` ends with the key that was missing.
    #[error("unknown key {}", KeyPath(.path))]
    UnknownKey { path: Vec<String> },

    /// A string value was found where a node was needed. `path` names that value.
    #[error("{} has string value {leaf:?}, not a node", KeyPath(.path))]
    NotANode { path: Vec<String>, leaf: String },

    /// A node was found where a string was needed. `keys` are the node's keys, sorted.
    #[error("{} is a node with {} key(s), not a string", KeyPath(.path), .keys.len())]
    NotALeaf { path: Vec<String>, keys: Vec<String> },
}

impl LookupError {
    pub fn path(&self) -> &[String] {
        match self {
            LookupError::UnknownKey { path }
            | LookupError::NotANode { path, .. }
            | LookupError::NotALeaf { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Renders a key path as `"a"→"b"→"c"`, or `top level` when empty.
#[derive(Debug, Clone, Copy)]
pub struct KeyPath<'a>(pub &'a [String]);

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("top level");
        }
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("→")?;
            }
            write!(f, "{key:?}")?;
        }
        Ok(())
    }
}
