//! The Navigator: every question you can ask about a tree.
//!
//! Each operation takes a starting directory as a path, resolves it once,
//! then does one recursive walk underneath it. Paths in results are relative
//! to that starting directory. A starting path that doesn't exist (or that
//! points somewhere a directory was needed) is never an error; it just gets
//! you the empty answer.
//!
//! ```
//! use treenav::nav::Navigator;
//! use treenav::sample::sample_tree;
//!
//! let tree = sample_tree();
//! let nav = Navigator::from(&tree);
//!
//! assert_eq!(nav.total_size("Documents/Projects"), 4_665_000);
//! assert_eq!(nav.list_files("Downloads/Library"), vec!["book1.pdf", "book2.pdf"]);
//! assert!(nav.list_files("Nowhere").is_empty());
//! ```
//!
//! The search and statistics operations live in [`crate::search`] and
//! [`crate::stats`].

use vtree::{Error, Node, NodeRef, Tree, TreePath};

#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    root: &'a Tree,
}

impl<'a> Navigator<'a> {
    /// Start navigating a file system root, which has to be a directory.
    pub fn new(root: &'a Node) -> Result<Self, Error> {
        match root {
            Node::Dir(tree) => Ok(Self { root: tree }),
            Node::File(_) => Err(Error::RootNotDirectory),
        }
    }

    pub fn tree(&self) -> &'a Tree {
        self.root
    }

    pub fn resolve(&self, path: impl Into<TreePath>) -> Option<NodeRef<'a>> {
        self.root.resolve(path)
    }

    /// Resolve, insisting on a directory.
    pub(crate) fn resolve_dir(&self, path: impl Into<TreePath>) -> Option<&'a Tree> {
        self.resolve(path).and_then(NodeRef::as_dir)
    }

    /// Paths of every file beneath `dir`, in tree order.
    pub fn list_files(&self, dir: impl Into<TreePath>) -> Vec<String> {
        match self.resolve_dir(dir) {
            Some(tree) => tree.files().into_iter().map(|(path, _)| path).collect(),
            None => vec![],
        }
    }

    /// Total bytes beneath `path`. If `path` is a file, that's just its size.
    pub fn total_size(&self, path: impl Into<TreePath>) -> u64 {
        self.resolve(path).map_or(0, NodeRef::total_size)
    }
}

impl<'a> From<&'a Tree> for Navigator<'a> {
    fn from(root: &'a Tree) -> Self {
        Self { root }
    }
}
