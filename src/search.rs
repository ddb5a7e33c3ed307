//! Finding files (and sometimes directories) by what they're called.
//!
//! ```
//! use treenav::nav::Navigator;
//! use treenav::sample::sample_tree;
//!
//! let tree = sample_tree();
//! let nav = Navigator::from(&tree);
//!
//! assert_eq!(nav.find_by_extension("Documents", "PDF"), vec![
//!     "Personal/resume.pdf",
//!     "report.pdf",
//! ]);
//! assert_eq!(nav.find_by_name("", "project", true), vec![
//!     "Documents/Projects",
//!     "Documents/Projects/project1.docx",
//!     "Documents/Projects/project2.docx",
//! ]);
//! ```

use crate::nav::Navigator;
use regex::Regex;
use vtree::{is_well_formed_name, Node, TreePath};

impl<'a> Navigator<'a> {
    /// Files under `dir` whose names end in `.ext`, ignoring case.
    ///
    /// This is an exact suffix match, so "doc" won't find "report.docx". A
    /// leading dot on `ext` is optional.
    pub fn find_by_extension(&self, dir: impl Into<TreePath>, ext: &str) -> Vec<String> {
        let suffix = format!(".{}", ext.strip_prefix('.').unwrap_or(ext).to_lowercase());
        let mut found = vec![];
        if let Some(tree) = self.resolve_dir(dir) {
            tree.walk(|v| {
                if v.node.is_file()
                    && is_well_formed_name(v.name)
                    && v.name.to_lowercase().ends_with(&suffix)
                {
                    found.push(v.path.to_owned());
                }
            });
        }
        found
    }

    /// Paths under `dir` whose own names contain `pattern`, ignoring case.
    ///
    /// Files always count. Directories only count when `include_dirs` is set,
    /// and show up right before their contents. Either way, every directory
    /// is searched.
    pub fn find_by_name(
        &self,
        dir: impl Into<TreePath>,
        pattern: &str,
        include_dirs: bool,
    ) -> Vec<String> {
        let pattern = pattern.to_lowercase();
        let mut found = vec![];
        if let Some(tree) = self.resolve_dir(dir) {
            tree.walk(|v| {
                let candidate = match v.node {
                    Node::File(_) => true,
                    Node::Dir(_) => include_dirs,
                };
                if candidate
                    && is_well_formed_name(v.name)
                    && v.name.to_lowercase().contains(&pattern)
                {
                    found.push(v.path.to_owned());
                }
            });
        }
        found
    }

    /// Files under `dir` whose whole relative path matches a regex.
    pub fn find_matching(&self, dir: impl Into<TreePath>, re: &Regex) -> Vec<String> {
        match self.resolve_dir(dir) {
            Some(tree) => tree
                .files()
                .into_iter()
                .map(|(path, _)| path)
                .filter(|path| re.is_match(path))
                .collect(),
            None => vec![],
        }
    }
}
