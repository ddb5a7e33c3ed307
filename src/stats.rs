//! Counting and ranking the files in a tree.

use crate::nav::Navigator;
use std::collections::BTreeMap;
use vtree::{is_well_formed_name, Node, Tree, TreePath};

/// Histogram key for files without a `.` in their name.
pub const NO_EXTENSION: &str = "no_extension";

/// Histogram key for files whose names can't be trusted.
pub const UNKNOWN: &str = "unknown";

/// The histogram bucket a file name lands in.
///
/// That's the lowercased text after the last dot, so `archive.tar.GZ` counts
/// as `gz` and `.bashrc` counts as `bashrc`.
///
/// ```
/// use treenav::stats::type_key;
///
/// assert_eq!(type_key("report.PDF"), "pdf");
/// assert_eq!(type_key("Makefile"), "no_extension");
/// assert_eq!(type_key("a/b.txt"), "unknown");
/// ```
pub fn type_key(name: &str) -> String {
    if !is_well_formed_name(name) {
        return UNKNOWN.into();
    }
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => NO_EXTENSION.into(),
    }
}

fn histogram(tree: &Tree) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for (name, node) in tree.iter() {
        match node {
            Node::File(_) => *counts.entry(type_key(name)).or_insert(0) += 1,
            Node::Dir(sub) => {
                for (key, n) in histogram(sub) {
                    *counts.entry(key).or_insert(0) += n;
                }
            }
        }
    }
    counts
}

impl<'a> Navigator<'a> {
    /// How many files of each type live under `dir`.
    ///
    /// Every file is counted exactly once, so the counts add up to
    /// `list_files(dir).len()`.
    pub fn count_by_type(&self, dir: impl Into<TreePath>) -> BTreeMap<String, usize> {
        self.resolve_dir(dir).map(histogram).unwrap_or_default()
    }

    /// The `n` biggest files under `dir`, biggest first.
    ///
    /// Files of equal size keep their tree order.
    pub fn find_largest(&self, dir: impl Into<TreePath>, n: usize) -> Vec<(String, u64)> {
        let mut files = match self.resolve_dir(dir) {
            Some(tree) => tree.files(),
            None => return vec![],
        };
        files.sort_by(|a, b| b.1.cmp(&a.1));
        files.truncate(n);
        files
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sample::sample_tree;

    #[test]
    fn keys() {
        assert_eq!(type_key("notes.txt"), "txt");
        assert_eq!(type_key("LOUD.TXT"), "txt");
        assert_eq!(type_key("archive.tar.gz"), "gz");
        assert_eq!(type_key("README"), NO_EXTENSION);
        assert_eq!(type_key(".bashrc"), "bashrc");
        assert_eq!(type_key("trailing."), "");
        assert_eq!(type_key(""), UNKNOWN);
        assert_eq!(type_key(".."), UNKNOWN);
        assert_eq!(type_key("nested/name.txt"), UNKNOWN);
    }

    #[test]
    fn sample_histogram() {
        let tree = sample_tree();
        let nav = Navigator::from(&tree);
        let counts = nav.count_by_type("");
        assert_eq!(
            counts.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>(),
            vec![
                ("csv", 1),
                ("docx", 2),
                ("exe", 1),
                ("jpg", 2),
                ("mp3", 1),
                ("mp4", 1),
                ("pdf", 4),
                ("png", 1),
                ("txt", 2),
                ("xlsx", 1),
            ]
        );
        assert_eq!(
            nav.count_by_type("Documents/Personal/Photos"),
            BTreeMap::from([("jpg".into(), 2), ("png".into(), 1)])
        );
    }

    #[test]
    fn histogram_counts_every_file_once() {
        let tree = sample_tree();
        let nav = Navigator::from(&tree);
        for dir in ["", "Documents", "Documents/Personal", "Downloads", "Downloads/Library"] {
            let total: usize = nav.count_by_type(dir).values().sum();
            assert_eq!(total, nav.list_files(dir).len(), "Failed on: {:?}", dir);
        }
    }

    #[test]
    fn histogram_odd_names() {
        let tree = Tree::new()
            .file("Makefile", 1)
            .file("LICENSE", 2)
            .file("bad/name.txt", 3)
            .file("", 4)
            .dir("sub", Tree::new().file("a.TXT", 5).file("b.txt", 6));
        let nav = Navigator::from(&tree);
        assert_eq!(
            nav.count_by_type(""),
            BTreeMap::from([
                (NO_EXTENSION.into(), 2),
                ("txt".into(), 2),
                (UNKNOWN.into(), 2),
            ])
        );
    }

    #[test]
    fn histogram_misses() {
        let tree = sample_tree();
        let nav = Navigator::from(&tree);
        assert!(nav.count_by_type("Nowhere").is_empty());
        assert!(nav.count_by_type("temp.txt").is_empty());
        assert!(Navigator::from(&Tree::new()).count_by_type("").is_empty());
    }

    #[test]
    fn largest() {
        let tree = sample_tree();
        let nav = Navigator::from(&tree);
        assert_eq!(
            nav.find_largest("", 5),
            vec![
                ("Downloads/video.mp4".to_owned(), 35_000_000),
                ("Downloads/program.exe".to_owned(), 15_000_000),
                ("Downloads/Library/book1.pdf".to_owned(), 12_000_000),
                ("Downloads/Library/book2.pdf".to_owned(), 9_500_000),
                ("Downloads/song.mp3".to_owned(), 8_000_000),
            ]
        );
        assert_eq!(
            nav.find_largest("", 1),
            vec![("Downloads/video.mp4".to_owned(), 35_000_000)]
        );
        assert_eq!(
            nav.find_largest("Documents/Projects", 2),
            vec![
                ("project1.docx".to_owned(), 2_500_000),
                ("project2.docx".to_owned(), 1_800_000),
            ]
        );
    }

    #[test]
    fn largest_laws() {
        let tree = sample_tree();
        let nav = Navigator::from(&tree);
        assert!(nav.find_largest("", 0).is_empty());
        assert!(nav.find_largest("Nowhere", 3).is_empty());

        for n in [1, 3, 16, 100] {
            let top = nav.find_largest("", n);
            assert_eq!(top.len(), n.min(16));
            assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
        }

        let everything = nav.find_largest("", 100);
        let mut listed = nav.list_files("");
        let mut ranked: Vec<_> = everything.into_iter().map(|(p, _)| p).collect();
        listed.sort();
        ranked.sort();
        assert_eq!(listed, ranked);
    }

    #[test]
    fn largest_ties_keep_tree_order() {
        let tree = Tree::new()
            .file("first", 10)
            .dir("d", Tree::new().file("second", 10))
            .file("big", 20)
            .file("third", 10);
        let nav = Navigator::from(&tree);
        assert_eq!(
            nav.find_largest("", 3),
            vec![
                ("big".to_owned(), 20),
                ("first".to_owned(), 10),
                ("d/second".to_owned(), 10),
            ]
        );
    }
}
