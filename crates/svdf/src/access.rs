//! Path lookups on a parsed [`Document`].
//!
//! A path is the sequence of names walked down from the root value, so for
//!
//! ```text
//! "AppState"
//! {
//! 	"UserConfig"
//! 	{
//! 		"language"		"english"
//! 	}
//! }
//! ```
//!
//! the path `["UserConfig", "language"]` names `"english"`. The empty path names
//! the root value itself.

use crate::document::Document;
use crate::error::LookupError;
use crate::value::{Node, Value};

fn owned<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|s| s.as_ref().to_string()).collect()
}

fn owned_keys(node: &Node) -> Vec<String> {
    node.keys().into_iter().map(str::to_string).collect()
}

impl Document {
    /// Walk `path` and return whatever value is there.
    pub fn lookup_value<S: AsRef<str>>(&self, path: &[S]) -> Result<&Value, LookupError> {
        let mut current = self.root_value();
        for (i, key) in path.iter().enumerate() {
            match current {
                Value::Leaf(leaf) => {
                    return Err(LookupError::NotANode {
                        path: owned(&path[..i]),
                        leaf: leaf.clone(),
                    });
                }
                Value::Node(node) => match node.get(key.as_ref()) {
                    Some(v) => current = v,
                    None => {
                        return Err(LookupError::UnknownKey {
                            path: owned(&path[..=i]),
                        });
                    }
                },
            }
        }
        Ok(current)
    }

    /// The string at `path`.
    ///
    /// Fails with [`LookupError::NotALeaf`] if `path` names a node, so
    /// `lookup_string(&[] as &[&str])` only succeeds when the root value is a string.
    pub fn lookup_string<S: AsRef<str>>(&self, path: &[S]) -> Result<&str, LookupError> {
        match self.lookup_value(path)? {
            Value::Leaf(s) => Ok(s),
            Value::Node(node) => Err(LookupError::NotALeaf {
                path: owned(path),
                keys: owned_keys(node),
            }),
        }
    }

    /// The node at `path`. A string there fails with [`LookupError::NotANode`].
    pub fn lookup_node<S: AsRef<str>>(&self, path: &[S]) -> Result<&Node, LookupError> {
        match self.lookup_value(path)? {
            Value::Node(node) => Ok(node),
            Value::Leaf(leaf) => Err(LookupError::NotANode {
                path: owned(path),
                leaf: leaf.clone(),
            }),
        }
    }

    /// Sorted keys of the node at `path`.
    pub fn lookup_keys<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<&str>, LookupError> {
        Ok(self.lookup_node(path)?.keys())
    }

    /// Like [`Document::lookup_string`], but a missing key yields `Ok(None)`.
    pub fn lookup_optional_string<S: AsRef<str>>(&self, path: &[S]) -> Result<Option<&str>, LookupError> {
        match self.lookup_string(path) {
            Ok(s) => Ok(Some(s)),
            Err(LookupError::UnknownKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether [`Document::lookup_string`] would succeed.
    pub fn has_string<S: AsRef<str>>(&self, path: &[S]) -> bool {
        matches!(self.probe(path), Some(Value::Leaf(_)))
    }

    /// Whether [`Document::lookup_node`] would succeed.
    pub fn has_node<S: AsRef<str>>(&self, path: &[S]) -> bool {
        matches!(self.probe(path), Some(Value::Node(_)))
    }

    fn probe<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        path.iter().try_fold(self.root_value(), |current, key| match current {
            Value::Node(node) => node.get(key.as_ref()),
            Value::Leaf(_) => None,
        })
    }
}
