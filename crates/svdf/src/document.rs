use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::value::Value;

/// Caller-supplied facts about where the input came from. Carried into the [`Document`] unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    pub path: Option<PathBuf>,
    pub modified_at: Option<SystemTime>,
    /// Defaults to the length of the parsed buffer when absent
    pub byte_size: Option<u64>,
}

impl SourceInfo {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_modified_at(mut self, modified_at: SystemTime) -> Self {
        self.modified_at = Some(modified_at);
        self
    }

    pub fn with_byte_size(mut self, byte_size: u64) -> Self {
        self.byte_size = Some(byte_size);
        self
    }
}

/// A successfully parsed simple VDF file.
///
/// Every document has exactly one top-level name (`"AppState"`, `"LibraryFolders"`, ...)
/// whose value is usually a node. Documents are read-only; query them through
/// [`Document::lookup_string`] and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source_path: Option<PathBuf>,
    modified_at: Option<SystemTime>,
    byte_size: u64,
    root_name: String,
    root_value: Value,
}

impl Document {
    pub(crate) fn new(source: SourceInfo, input_len: usize, root_name: String, root_value: Value) -> Self {
        Self {
            source_path: source.path,
            modified_at: source.modified_at,
            byte_size: source.byte_size.unwrap_or(input_len as u64),
            root_name,
            root_value,
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn modified_at(&self) -> Option<SystemTime> {
        self.modified_at
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn root_value(&self) -> &Value {
        &self.root_value
    }
}
