use crate::context::Context;
use crate::op::{Op, OpCode};
use strum::IntoEnumIterator;

pub struct OpDoc {
    pub flag: &'static str,
    pub args: &'static str,
    pub short: &'static str,
    pub examples: Vec<ExamplePipeline>,
}

/// The same pipeline three ways: as typed, as parsed, and as flow calls.
pub struct ExamplePipeline {
    pub as_txt: Vec<&'static str>,
    pub as_ops: Vec<Op>,
    pub as_ctx: &'static dyn Fn(&mut Context) -> std::io::Result<()>,
}

impl OpCode {
    pub fn doc(&self) -> OpDoc {
        match self {
            OpCode::Sample => OpDoc {
                flag: "--sample",
                args: "",
                short: "Switch back to the built-in sample tree (the starting tree).",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--load", "fixture/sample.json", "--sample", "--size"],
                    as_ops: vec![
                        Op::Load("fixture/sample.json".into()),
                        Op::Sample,
                        Op::Size("".into()),
                    ],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.load("fixture/sample.json")?.sample()?.size("")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Load => OpDoc {
                flag: "--load",
                args: " file",
                short: "Replace the working tree with a JSON document.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--load", "fixture/sample.json", "--list", "Downloads"],
                    as_ops: vec![
                        Op::Load("fixture/sample.json".into()),
                        Op::List("Downloads".into()),
                    ],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.load("fixture/sample.json")?.list("Downloads")?;
                        Ok(())
                    },
                }],
            },
            OpCode::List => OpDoc {
                flag: "--list",
                args: " [dir]",
                short: "List every file beneath a directory.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--list", "Documents/Personal"],
                    as_ops: vec![Op::List("Documents/Personal".into())],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.list("Documents/Personal")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Size => OpDoc {
                flag: "--size",
                args: " [path]",
                short: "Total size of a directory or file.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--size", "Documents/Projects"],
                    as_ops: vec![Op::Size("Documents/Projects".into())],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.size("Documents/Projects")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Ext => OpDoc {
                flag: "--ext",
                args: " ext [dir]",
                short: "Find files with an extension, ignoring case.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--ext", "pdf"],
                    as_ops: vec![Op::Ext {
                        ext: "pdf".into(),
                        dir: "".into(),
                    }],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.ext("pdf", "")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Name => OpDoc {
                flag: "--name",
                args: " pattern [dir]",
                short: "Find files whose names contain a pattern, ignoring case.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--name", "project", "Documents"],
                    as_ops: vec![Op::Name {
                        pattern: "project".into(),
                        dir: "Documents".into(),
                    }],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.name("project", "Documents")?;
                        Ok(())
                    },
                }],
            },
            OpCode::NameAll => OpDoc {
                flag: "--name-all",
                args: " pattern [dir]",
                short: "Like --name, but directories can match too.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--name-all", "project"],
                    as_ops: vec![Op::NameAll {
                        pattern: "project".into(),
                        dir: "".into(),
                    }],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.name_all("project", "")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Types => OpDoc {
                flag: "--types",
                args: " [dir]",
                short: "Count files by extension.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--types", "Downloads"],
                    as_ops: vec![Op::Types("Downloads".into())],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.types("Downloads")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Largest => OpDoc {
                flag: "--largest",
                args: " n [dir]",
                short: "The n biggest files, biggest first.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--largest", "3"],
                    as_ops: vec![Op::Largest {
                        n: 3,
                        dir: "".into(),
                    }],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.largest(3, "")?;
                        Ok(())
                    },
                }],
            },
            OpCode::Filter => OpDoc {
                flag: "--filter",
                args: " pattern [dir]",
                short: "Find files where the relative path matches a regex.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--filter", "^Downloads/.*\\.mp[34]$"],
                    as_ops: vec![Op::Filter {
                        pattern: "^Downloads/.*\\.mp[34]$".into(),
                        dir: "".into(),
                    }],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.filter("^Downloads/.*\\.mp[34]$", "")?;
                        Ok(())
                    },
                }],
            },
            OpCode::FormatSize => OpDoc {
                flag: "--format-size",
                args: " bytes",
                short: "Print a byte count in human units.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--format-size", "1048576"],
                    as_ops: vec![Op::FormatSize(1_048_576)],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.format_size(1_048_576)?;
                        Ok(())
                    },
                }],
            },
            OpCode::Report => OpDoc {
                flag: "--report",
                args: "",
                short: "Run the walkthrough report against the working tree.",
                examples: vec![ExamplePipeline {
                    as_txt: vec!["--load", "fixture/sample.json", "--report"],
                    as_ops: vec![Op::Load("fixture/sample.json".into()), Op::Report],
                    as_ctx: &|ctx: &mut Context| {
                        ctx.load("fixture/sample.json")?.report()?;
                        Ok(())
                    },
                }],
            },
        }
    }
}

pub fn usage() -> String {
    let mut sections: Vec<&str> = vec![];
    sections.push("Usage: treenav [--help|--version|--report|op...]\n\n");
    sections.push("Without a --load, ops run against the sample tree.\n");
    sections.push("Directories are /-separated paths, and default to the root.\n\n");
    sections.push("Valid ops:\n\n");

    for oc in OpCode::iter() {
        let doc = oc.doc();
        sections.extend([
            doc.flag,
            ": ",
            doc.short,
            "\n    Usage: ",
            doc.flag,
            doc.args,
            "\n    Examples:\n",
        ]);
        for example in doc.examples {
            sections.push("      treenav");
            for arg in example.as_txt {
                sections.extend([" ", arg]);
            }
            sections.push("\n");
        }
        sections.push("\n");
    }
    sections.concat()
}
