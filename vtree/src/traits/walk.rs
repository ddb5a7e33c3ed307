//! The one recursive walk every traversal is built on.
//!
//! Visits every node beneath a directory, pre-order, in insertion order,
//! handing the callback each node along with its `/`-joined path relative to
//! where the walk started. Directories are visited before their children.
//!
//! ```
//! use ::vtree::*;
//!
//! let tree = Tree::new()
//!     .dir("a", Tree::new().file("b.txt", 1))
//!     .file("c.txt", 2);
//!
//! let mut seen = vec![];
//! tree.walk(|v| seen.push(v.path.to_owned()));
//! assert_eq!(seen, vec!["a", "a/b.txt", "c.txt"]);
//! ```

use crate::types::*;

/// One stop on a walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Path relative to the walk root, including `name`.
    pub path: &'a str,
    pub name: &'a str,
    pub node: &'a Node,
}

impl Tree {
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(Visit<'_>),
    {
        walk_from(self, "", &mut f)
    }

    /// Every file beneath this directory, as `(path, size)`, in walk order.
    pub fn files(&self) -> Vec<(String, u64)> {
        let mut files = vec![];
        self.walk(|v| {
            if let Node::File(size) = v.node {
                files.push((v.path.to_owned(), *size));
            }
        });
        files
    }
}

fn walk_from<F>(tree: &Tree, prefix: &str, f: &mut F)
where
    F: FnMut(Visit<'_>),
{
    for (name, node) in tree.iter() {
        let path = if prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{}/{}", prefix, name)
        };
        f(Visit {
            path: &path,
            name,
            node,
        });
        if let Node::Dir(subtree) = node {
            walk_from(subtree, &path, f);
        }
    }
}
