//! Serde export of parsed trees: leaves as strings, nodes as maps
//!
//! This exposes the tree to other formats (JSON for inspection); VDF text is never written.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::document::Document;
use crate::value::{Node, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Leaf(s) => serializer.serialize_str(s),
            Value::Node(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A document serializes as a one-entry map, `{root_name: root_value}`.
impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.root_name(), self.root_value())?;
        map.end()
    }
}

#[cfg(feature = "json")]
impl Value {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Leaf(s) => serde_json::Value::String(s.clone()),
            Value::Node(n) => serde_json::Value::Object(
                n.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

#[cfg(feature = "json")]
impl Document {
    pub fn to_json(&self) -> serde_json::Value {
        let mut m = serde_json::Map::new();
        m.insert(self.root_name().to_string(), self.root_value().to_json());
        serde_json::Value::Object(m)
    }
}
