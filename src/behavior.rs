use crate::context::Context;
use crate::logger::Logger;
use crate::nav::Navigator;
use crate::op::{compile_pattern, Op};
use crate::report::write_report;
use crate::sample::sample_tree;
use crate::size::format_size;
use std::io::{Result, Write};
use vtree::Tree;

pub fn exec_step(ctx: &mut Context, op: &Op) -> Result<()> {
    match op {
        Op::Sample => {
            ctx.tree = sample_tree();
            write!(ctx.log.notes(), "Using the sample tree\n")
        }
        Op::Load(file) => {
            let doc = std::fs::read_to_string(file)?;
            ctx.tree = Tree::from_json(&doc)?;
            write!(
                ctx.log.notes(),
                "Loaded {} files from {}\n",
                ctx.tree.files().len(),
                file
            )
        }
        _ => query(&Navigator::from(&ctx.tree), ctx.log, op),
    }
}

/// Everything that only reads the working tree.
fn query(nav: &Navigator, log: &mut Logger, op: &Op) -> Result<()> {
    let found = match op {
        Op::Sample | Op::Load(_) => vec![],
        Op::List(dir) => nav.list_files(dir),
        Op::Size(dir) => {
            let bytes = nav.total_size(dir);
            return write!(log.results(), "{} ({})\n", bytes, format_size(bytes));
        }
        Op::Ext { ext, dir } => nav.find_by_extension(dir, ext),
        Op::Name { pattern, dir } => nav.find_by_name(dir, pattern, false),
        Op::NameAll { pattern, dir } => nav.find_by_name(dir, pattern, true),
        Op::Types(dir) => {
            for (ext, count) in nav.count_by_type(dir) {
                write!(log.results(), "{}: {} files\n", ext, count)?;
            }
            return Ok(());
        }
        Op::Largest { n, dir } => {
            for (path, bytes) in nav.find_largest(dir, *n) {
                write!(log.results(), "{} ({})\n", path, format_size(bytes))?;
            }
            return Ok(());
        }
        Op::Filter { pattern, dir } => nav.find_matching(dir, &compile_pattern(pattern)?),
        Op::FormatSize(bytes) => return write!(log.results(), "{}\n", format_size(*bytes)),
        Op::Report => return write_report(nav, log),
    };
    for path in found {
        write!(log.results(), "{}\n", path)?;
    }
    Ok(())
}

// The flow API for contexts is tested in doc.rs.
impl Context<'_> {
    pub fn sample(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Sample)?;
        Ok(self)
    }

    pub fn load(&mut self, file: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Load(file.as_ref().into()))?;
        Ok(self)
    }

    pub fn list(&mut self, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::List(dir.as_ref().into()))?;
        Ok(self)
    }

    pub fn size(&mut self, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Size(dir.as_ref().into()))?;
        Ok(self)
    }

    pub fn ext(&mut self, ext: impl AsRef<str>, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Ext {
            ext: ext.as_ref().into(),
            dir: dir.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn name(&mut self, pattern: impl AsRef<str>, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Name {
            pattern: pattern.as_ref().into(),
            dir: dir.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn name_all(
        &mut self,
        pattern: impl AsRef<str>,
        dir: impl AsRef<str>,
    ) -> Result<&mut Self> {
        self.apply(&Op::NameAll {
            pattern: pattern.as_ref().into(),
            dir: dir.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn types(&mut self, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Types(dir.as_ref().into()))?;
        Ok(self)
    }

    pub fn largest(&mut self, n: usize, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Largest {
            n: n,
            dir: dir.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn filter(&mut self, pattern: impl AsRef<str>, dir: impl AsRef<str>) -> Result<&mut Self> {
        self.apply(&Op::Filter {
            pattern: pattern.as_ref().into(),
            dir: dir.as_ref().into(),
        })?;
        Ok(self)
    }

    pub fn format_size(&mut self, bytes: impl Into<i128>) -> Result<&mut Self> {
        self.apply(&Op::FormatSize(bytes.into()))?;
        Ok(self)
    }

    pub fn report(&mut self) -> Result<&mut Self> {
        self.apply(&Op::Report)?;
        Ok(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::logger::Policy;
    use indoc::indoc;
    use std::io::ErrorKind;

    /// Run one step with headers switched off, returning (stdout, stderr).
    fn run(tree: Tree, op: Op) -> Result<(String, String)> {
        let mut log = Logger::new_vec();
        log.pol.opheader = Policy::Silent;
        exec_step(&mut Context::with_tree(&mut log, tree), &op)?;
        let (out, err) = log.recorded();
        Ok((out.to_owned(), err.to_owned()))
    }

    #[test]
    fn list() -> Result<()> {
        let (out, _) = run(sample_tree(), Op::List("Documents/Personal".into()))?;
        assert_eq!(
            out,
            indoc! {"
                resume.pdf
                budget.xlsx
                Photos/vacation.jpg
                Photos/family.jpg
                Photos/graduation.png
            "}
        );
        let (out, _) = run(sample_tree(), Op::List("Nowhere".into()))?;
        assert_eq!(out, "");
        Ok(())
    }

    #[test]
    fn size() -> Result<()> {
        let (out, _) = run(sample_tree(), Op::Size("".into()))?;
        assert_eq!(out, "96417000 (91.95 MB)\n");
        let (out, _) = run(sample_tree(), Op::Size("Nowhere".into()))?;
        assert_eq!(out, "0 (0 B)\n");
        Ok(())
    }

    #[test]
    fn searches() -> Result<()> {
        let (out, _) = run(
            sample_tree(),
            Op::Ext {
                ext: "PDF".into(),
                dir: "Downloads".into(),
            },
        )?;
        assert_eq!(out, "Library/book1.pdf\nLibrary/book2.pdf\n");

        let (out, _) = run(
            sample_tree(),
            Op::NameAll {
                pattern: "lib".into(),
                dir: "".into(),
            },
        )?;
        assert_eq!(out, "Downloads/Library\n");

        let (out, _) = run(
            sample_tree(),
            Op::Name {
                pattern: "lib".into(),
                dir: "".into(),
            },
        )?;
        assert_eq!(out, "");

        let (out, _) = run(
            sample_tree(),
            Op::Filter {
                pattern: r"\.(mp3|mp4)$".into(),
                dir: "Downloads".into(),
            },
        )?;
        assert_eq!(out, "song.mp3\nvideo.mp4\n");
        Ok(())
    }

    #[test]
    fn types() -> Result<()> {
        let (out, _) = run(sample_tree(), Op::Types("Documents/Projects".into()))?;
        assert_eq!(
            out,
            indoc! {"
                csv: 1 files
                docx: 2 files
                txt: 1 files
            "}
        );
        Ok(())
    }

    #[test]
    fn largest() -> Result<()> {
        let (out, _) = run(
            sample_tree(),
            Op::Largest {
                n: 2,
                dir: "Documents".into(),
            },
        )?;
        assert_eq!(
            out,
            indoc! {"
                Personal/Photos/graduation.png (4.01 MB)
                Personal/Photos/vacation.jpg (3.34 MB)
            "}
        );
        Ok(())
    }

    #[test]
    fn format_sizes() -> Result<()> {
        let (out, _) = run(Tree::new(), Op::FormatSize(-1_048_576))?;
        assert_eq!(out, "1.00 MB\n");
        Ok(())
    }

    #[test]
    fn load_and_reset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("tree.json");
        std::fs::write(&file, r#"{"src": {"main.rs": 300, "lib.rs": 1200}, "Cargo.toml": 80}"#)?;
        let file = file.to_string_lossy();

        let mut log = Logger::new_vec();
        log.pol.opheader = Policy::Silent;
        let mut ctx = Context::new(&mut log);
        exec_step(&mut ctx, &Op::Load(file.to_string()))?;
        exec_step(&mut ctx, &Op::List("".into()))?;
        exec_step(&mut ctx, &Op::Sample)?;
        exec_step(&mut ctx, &Op::Size("".into()))?;
        assert_eq!(
            log.recorded(),
            (
                "src/main.rs\nsrc/lib.rs\nCargo.toml\n96417000 (91.95 MB)\n",
                format!("Loaded 3 files from {}\nUsing the sample tree\n", file).as_str()
            )
        );
        Ok(())
    }

    #[test]
    fn load_failures() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing.json");
        let err = run(sample_tree(), Op::Load(missing.to_string_lossy().into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let file = dir.path().join("file.json");
        std::fs::write(&file, "42")?;
        let err = run(sample_tree(), Op::Load(file.to_string_lossy().into())).unwrap_err();
        assert_eq!(err.to_string(), vtree::Error::RootNotDirectory.to_string());
        Ok(())
    }
}
