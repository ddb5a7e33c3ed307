//! JSON documents as trees.
//!
//! The format is the obvious one: an object per directory, and a
//! non-negative integer per file. Key order in the document is the
//! insertion order of the tree.
//!
//! ```
//! use ::vtree::*;
//!
//! let tree = Tree::from_json(r#"{"b": {"x.txt": 5}, "a.pdf": 10}"#)?;
//! assert_eq!(tree.names().collect::<Vec<_>>(), vec!["b", "a.pdf"]);
//! assert_eq!(tree.to_json()?, r#"{"b":{"x.txt":5},"a.pdf":10}"#);
//!
//! assert_eq!(Tree::from_json("42"), Err(Error::RootNotDirectory));
//! # Ok::<(), Error>(())
//! ```

use crate::types::*;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

impl Tree {
    /// Parse a document whose top level must be an object.
    pub fn from_json(src: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(src)?;
        if !value.is_object() {
            return Err(Error::RootNotDirectory);
        }
        // Parse again rather than converting the Value, which doesn't keep key order.
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Tree {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, node) in self.iter() {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Dir(tree) => tree.serialize(serializer),
            Node::File(size) => serializer.serialize_u64(*size),
        }
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = Tree;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a directory object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Tree, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut tree = Tree::new();
        while let Some((name, node)) = access.next_entry::<String, Node>()? {
            tree.insert(name, node);
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative file size or a directory object")
    }

    fn visit_u64<E>(self, size: u64) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node::File(size))
    }

    fn visit_i64<E>(self, size: i64) -> Result<Node, E>
    where
        E: de::Error,
    {
        u64::try_from(size)
            .map(Node::File)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(size), &self))
    }

    fn visit_map<M>(self, access: M) -> Result<Node, M::Error>
    where
        M: MapAccess<'de>,
    {
        TreeVisitor.visit_map(access).map(Node::Dir)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}
