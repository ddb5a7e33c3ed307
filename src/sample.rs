//! The demonstration tree used by `--sample`, the report, and most tests.

use vtree::Tree;

/// Build a fresh copy of the sample file system.
///
/// ```text
/// Documents/
///   Projects/   project1.docx, project2.docx, notes.txt, data.csv
///   Personal/   resume.pdf, budget.xlsx, Photos/{vacation.jpg, family.jpg, graduation.png}
///   report.pdf
/// Downloads/    program.exe, Library/{book1.pdf, book2.pdf}, song.mp3, video.mp4
/// temp.txt
/// ```
pub fn sample_tree() -> Tree {
    Tree::new()
        .dir(
            "Documents",
            Tree::new()
                .dir(
                    "Projects",
                    Tree::new()
                        .file("project1.docx", 2_500_000)
                        .file("project2.docx", 1_800_000)
                        .file("notes.txt", 15_000)
                        .file("data.csv", 350_000),
                )
                .dir(
                    "Personal",
                    Tree::new()
                        .file("resume.pdf", 520_000)
                        .file("budget.xlsx", 480_000)
                        .dir(
                            "Photos",
                            Tree::new()
                                .file("vacation.jpg", 3_500_000)
                                .file("family.jpg", 2_800_000)
                                .file("graduation.png", 4_200_000),
                        ),
                )
                .file("report.pdf", 750_000),
        )
        .dir(
            "Downloads",
            Tree::new()
                .file("program.exe", 15_000_000)
                .dir(
                    "Library",
                    Tree::new()
                        .file("book1.pdf", 12_000_000)
                        .file("book2.pdf", 9_500_000),
                )
                .file("song.mp3", 8_000_000)
                .file("video.mp4", 35_000_000),
        )
        .file("temp.txt", 2_000)
}

#[cfg(test)]
mod test {
    use super::*;
    use vtree::{Node, NodeRef};

    #[test]
    fn shape() {
        let tree = sample_tree();
        assert_eq!(
            tree.names().collect::<Vec<_>>(),
            vec!["Documents", "Downloads", "temp.txt"]
        );
        assert_eq!(tree.get("temp.txt"), Some(&Node::File(2_000)));
        assert_eq!(
            tree.resolve("Documents/Projects/project1.docx"),
            Some(NodeRef::File(2_500_000))
        );
        assert_eq!(tree.files().len(), 16);
    }

    #[test]
    fn fresh_every_time() {
        let mut first = sample_tree();
        first.insert("temp.txt", Node::File(1));
        assert_eq!(sample_tree().get("temp.txt"), Some(&Node::File(2_000)));
    }

    #[test]
    fn matches_json_document() -> Result<(), vtree::Error> {
        let doc = include_str!("../fixture/sample.json");
        assert_eq!(Tree::from_json(doc)?, sample_tree());
        Ok(())
    }
}
