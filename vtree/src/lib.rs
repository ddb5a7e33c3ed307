//! An in-memory tree that pretends to be a file system.
//!
//! Directories are insertion-ordered mappings from names to nodes, and files
//! are nothing more than a byte count. That's enough to answer most of the
//! questions you'd ask a disk usage tool ("what's big?", "how many PDFs do I
//! have?") without touching a real disk.
//!
//! ```
//! use ::vtree::*;
//!
//! let tree = Tree::new()
//!     .dir("docs", Tree::new().file("a.txt", 10).file("b.pdf", 32))
//!     .file("notes", 1);
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.resolve("docs/b.pdf"), Some(NodeRef::File(32)));
//! assert_eq!(tree.resolve("docs/b.pdf/deeper"), None);
//! assert_eq!(Node::from(tree).total_size(), 43);
//! ```

pub mod traits;
pub mod types;

pub use traits::*;
pub use types::*;
