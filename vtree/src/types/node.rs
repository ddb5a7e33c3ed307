//! Directories, files, and the mapping that holds them together.

/// Either a directory or a file.
///
/// Files don't have contents here, just a size in bytes. That's the only
/// thing any of the traversals care about.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node {
    Dir(Tree),
    File(u64),
}

impl Node {
    /// Does this represent a directory?
    pub fn is_dir(&self) -> bool {
        match self {
            Self::Dir(_) => true,
            Self::File(_) => false,
        }
    }

    /// Does this represent a file?
    pub fn is_file(&self) -> bool {
        match self {
            Self::Dir(_) => false,
            Self::File(_) => true,
        }
    }

    /// Borrow the directory mapping, if this is a directory.
    pub fn as_dir(&self) -> Option<&Tree> {
        match self {
            Self::Dir(tree) => Some(tree),
            Self::File(_) => None,
        }
    }

    /// Sum of every file size at or beneath this node.
    ///
    /// A file is its own total. Saturates at `u64::MAX`.
    pub fn total_size(&self) -> u64 {
        match self {
            Self::File(size) => *size,
            Self::Dir(tree) => tree.total_size(),
        }
    }
}

impl From<Tree> for Node {
    fn from(tree: Tree) -> Self {
        Self::Dir(tree)
    }
}

impl From<u64> for Node {
    fn from(size: u64) -> Self {
        Self::File(size)
    }
}

/// An insertion-ordered mapping from names to nodes.
///
/// Iteration order is the order names were first inserted. Names are unique:
/// inserting a name that already exists swaps the node out in place, without
/// moving the entry to the end.
///
/// Lookups are linear.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Tree(Vec<(String, Node)>);

impl Tree {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Insert or replace a child. Returns the old node if there was one.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        let name = name.into();
        let node = node.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, node)),
            None => {
                self.0.push((name, node));
                None
            }
        }
    }

    /// Builder-style insert.
    pub fn set(mut self, name: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(name, node);
        self
    }

    /// Builder-style insert of a file.
    pub fn file(self, name: impl Into<String>, size: u64) -> Self {
        self.set(name, Node::File(size))
    }

    /// Builder-style insert of a subdirectory.
    pub fn dir(self, name: impl Into<String>, tree: Tree) -> Self {
        self.set(name, Node::Dir(tree))
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.0
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.0.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// Sum of every file size beneath this directory.
    pub fn total_size(&self) -> u64 {
        self.iter()
            .map(|(_, node)| node.total_size())
            .fold(0, u64::saturating_add)
    }

    /// Number of immediate children.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
