//! Convert to and from flat lists of entries.
//!
//! These are vectors of `(path, contents)` tuples, which is often a more
//! convenient shape for building test data than nesting builders, and is a
//! natural shape for anything that scans a real directory.
//!
//! ```
//! use ::vtree::*;
//!
//! // Intermediate directories are created as needed.
//! let tree = Tree::from_entries([
//!     ("a/path/to/a/file", Contents::File(34)),
//!     ("another/file", Contents::File(910)),
//!     ("an/empty/dir", Contents::Dir),
//! ]);
//!
//! assert_eq!(tree.names().collect::<Vec<_>>(), vec!["a", "another", "an"]);
//! assert_eq!(tree.resolve("a/path/to/a/file"), Some(NodeRef::File(34)));
//!
//! // Directories come out before their contents.
//! let entries = tree.to_entries();
//! assert_eq!(entries[0], (TreePath::from("a"), Contents::Dir));
//! assert_eq!(entries[4], (TreePath::from("a/path/to/a/file"), Contents::File(34)));
//! ```

use crate::types::*;

/// Entry-level view of a node: no children, just what kind of thing it is.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Contents {
    Dir,
    File(u64),
}

/// Internal conversion format.
pub struct Entry(TreePath, Contents);

impl<S> From<(S, Contents)> for Entry
where
    S: Into<TreePath>,
{
    fn from(src: (S, Contents)) -> Self {
        Self(src.0.into(), src.1)
    }
}

impl Tree {
    /// Build a tree out of flat entries.
    ///
    /// Later entries win over earlier ones with the same path. A file that
    /// sits where a later entry needs a directory gets replaced by one. An
    /// entry for an existing directory leaves its contents alone. Entries
    /// with a `..` segment could never be resolved, so they are skipped.
    pub fn from_entries<E>(entries: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<Entry>,
    {
        let mut tree = Tree::new();
        for entry in entries {
            let Entry(path, contents) = entry.into();
            let segments: Vec<&str> = path.segments().collect();
            if segments.contains(&"..") {
                continue;
            }
            place(&mut tree, &segments, contents);
        }
        tree
    }

    /// Flatten this tree into entries, pre-order.
    pub fn to_entries(&self) -> Vec<(TreePath, Contents)> {
        let mut entries = vec![];
        self.walk(|v| {
            let contents = match v.node {
                Node::Dir(_) => Contents::Dir,
                Node::File(size) => Contents::File(*size),
            };
            entries.push((TreePath::from(v.path), contents));
        });
        entries
    }
}

fn place(tree: &mut Tree, segments: &[&str], contents: Contents) {
    match segments {
        [] => {}
        [name] => match contents {
            Contents::File(size) => {
                tree.insert(*name, Node::File(size));
            }
            Contents::Dir => {
                if !matches!(tree.get(name), Some(Node::Dir(_))) {
                    tree.insert(*name, Tree::new());
                }
            }
        },
        [name, rest @ ..] => {
            if !matches!(tree.get(name), Some(Node::Dir(_))) {
                tree.insert(*name, Tree::new());
            }
            if let Some(Node::Dir(subtree)) = tree.get_mut(name) {
                place(subtree, rest, contents);
            }
        }
    }
}
