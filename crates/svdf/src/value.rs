use std::collections::BTreeMap;
use std::collections::btree_map;

/// A value in a simple VDF document: either a string or a nested list of names and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Leaf(String),
    Node(Node),
}

impl Value {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Value::Leaf(s) => Some(s),
            Value::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            Value::Leaf(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Leaf(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Leaf(s)
    }
}

impl From<Node> for Value {
    fn from(n: Node) -> Self {
        Value::Node(n)
    }
}

/// Names mapped to values. Each name appears once; iteration is in byte order of the names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    entries: BTreeMap<String, Value>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys sorted by codepoint (case-sensitive, no locale rules).
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Replaces any previous value under `key`.
    pub(crate) fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }
}

impl From<BTreeMap<String, Value>> for Node {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}

/// Later pairs win over earlier pairs with the same name.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = Node::new();
        for (k, v) in iter {
            node.insert(k.into(), v.into());
        }
        node
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
