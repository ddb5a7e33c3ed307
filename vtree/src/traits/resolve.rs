//! Walk a path down from the root to find what it points at.
//!
//! ```
//! use ::vtree::*;
//!
//! let tree = Tree::new().dir("a", Tree::new().file("b.txt", 3));
//!
//! assert_eq!(tree.resolve("a/b.txt"), Some(NodeRef::File(3)));
//! assert_eq!(tree.resolve("//a//b.txt"), Some(NodeRef::File(3)));
//! assert_eq!(tree.resolve(""), Some(NodeRef::Dir(&tree)));
//! assert_eq!(tree.resolve("a/missing"), None);
//! assert_eq!(tree.resolve("a/.."), None);
//! ```

use crate::types::*;

/// A borrowed node, which can also stand in for a root `Tree`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NodeRef<'a> {
    Dir(&'a Tree),
    File(u64),
}

impl<'a> NodeRef<'a> {
    pub fn as_dir(self) -> Option<&'a Tree> {
        match self {
            Self::Dir(tree) => Some(tree),
            Self::File(_) => None,
        }
    }

    pub fn total_size(self) -> u64 {
        match self {
            Self::Dir(tree) => tree.total_size(),
            Self::File(size) => size,
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Dir(tree) => Self::Dir(tree),
            Node::File(size) => Self::File(*size),
        }
    }
}

impl<'a> From<&'a Tree> for NodeRef<'a> {
    fn from(tree: &'a Tree) -> Self {
        Self::Dir(tree)
    }
}

impl Tree {
    /// Find the node a path points at, starting from this directory.
    ///
    /// The path is canonized first, so empty and dot segments are skipped and
    /// a path with nothing left in it resolves to this directory. Returns
    /// `None` if any segment is missing or is `..`, or if the path tries to
    /// go *through* a file as if it were a directory.
    pub fn resolve(&self, path: impl Into<TreePath>) -> Option<NodeRef<'_>> {
        let path = path.into();
        let mut current = NodeRef::Dir(self);
        for segment in path.segments() {
            if segment == ".." {
                return None;
            }
            current = match current {
                NodeRef::Dir(tree) => tree.get(segment)?.into(),
                NodeRef::File(_) => return None,
            };
        }
        Some(current)
    }
}
