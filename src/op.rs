use regex::Regex;
use std::fmt;
use strum_macros::EnumIter;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    MissingArg { oc: OpCode, name: &'static str },
    TooManyArgs { oc: OpCode, excess: usize },
    ArgBeforeFirstOp(String),
    InvalidCount(String),
    InvalidSize(String),
    InvalidPattern(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArg { oc, name } => write!(f, "Op {:?} missing arg {}", oc, name),
            Self::TooManyArgs { oc, excess } => {
                write!(f, "Op {:?} given {} too many arguments", oc, excess)
            }
            Self::ArgBeforeFirstOp(arg) => write!(f, "Arg {:?} given before any operations", arg),
            Self::InvalidCount(arg) => write!(f, "Expected a count of zero or more, got {:?}", arg),
            Self::InvalidSize(arg) => write!(f, "Expected a number of bytes, got {:?}", arg),
            Self::InvalidPattern(arg) => write!(f, "Not a valid regex: {:?}", arg),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for std::io::Error {
    fn from(pe: ParseError) -> Self {
        Self::other(pe.to_string())
    }
}

#[derive(Debug, PartialEq, Clone, Copy, EnumIter)]
pub enum OpCode {
    Sample,
    Load,
    List,
    Size,
    Ext,
    Name,
    NameAll,
    Types,
    Largest,
    Filter,
    FormatSize,
    Report,
}

/// One parsed step of a pipeline.
///
/// Directory parameters are always optional on the command line, and an
/// empty string means the root of the working tree.
#[derive(Debug, PartialEq, Clone)]
pub enum Op {
    Sample,
    Load(String),
    List(String),
    Size(String),
    Ext { ext: String, dir: String },
    Name { pattern: String, dir: String },
    NameAll { pattern: String, dir: String },
    Types(String),
    Largest { n: usize, dir: String },
    Filter { pattern: String, dir: String },
    FormatSize(i128),
    Report,
}

impl OpCode {
    pub fn to_op(&self, args: Vec<String>) -> Result<Op, ParseError> {
        let mut it = args.into_iter();
        let op = match self {
            Self::Sample => Op::Sample,
            Self::Load => Op::Load(consume_param(self, "file", &mut it)?),
            Self::List => Op::List(optional_param(&mut it)),
            Self::Size => Op::Size(optional_param(&mut it)),
            Self::Ext => Op::Ext {
                ext: consume_param(self, "ext", &mut it)?,
                dir: optional_param(&mut it),
            },
            Self::Name => Op::Name {
                pattern: consume_param(self, "pattern", &mut it)?,
                dir: optional_param(&mut it),
            },
            Self::NameAll => Op::NameAll {
                pattern: consume_param(self, "pattern", &mut it)?,
                dir: optional_param(&mut it),
            },
            Self::Types => Op::Types(optional_param(&mut it)),
            Self::Largest => {
                let n: String = consume_param(self, "n", &mut it)?;
                Op::Largest {
                    n: parse_count(&n)?,
                    dir: optional_param(&mut it),
                }
            }
            Self::Filter => {
                let pattern: String = consume_param(self, "pattern", &mut it)?;
                compile_pattern(&pattern)?;
                Op::Filter {
                    pattern: pattern,
                    dir: optional_param(&mut it),
                }
            }
            Self::FormatSize => {
                let bytes: String = consume_param(self, "bytes", &mut it)?;
                Op::FormatSize(crate::size::parse_size(&bytes)?)
            }
            Self::Report => Op::Report,
        };
        no_further_params(self, &mut it)?;
        Ok(op)
    }

    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "--sample" => Some(Self::Sample),
            "--load" => Some(Self::Load),
            "--list" => Some(Self::List),
            "--size" => Some(Self::Size),
            "--ext" => Some(Self::Ext),
            "--name" => Some(Self::Name),
            "--name-all" => Some(Self::NameAll),
            "--types" => Some(Self::Types),
            "--largest" => Some(Self::Largest),
            "--filter" => Some(Self::Filter),
            "--format-size" => Some(Self::FormatSize),
            "--report" => Some(Self::Report),
            _ => None,
        }
    }
}

impl Op {
    pub fn to_code(&self) -> OpCode {
        match self {
            Self::Sample => OpCode::Sample,
            Self::Load(_) => OpCode::Load,
            Self::List(_) => OpCode::List,
            Self::Size(_) => OpCode::Size,
            Self::Ext { .. } => OpCode::Ext,
            Self::Name { .. } => OpCode::Name,
            Self::NameAll { .. } => OpCode::NameAll,
            Self::Types(_) => OpCode::Types,
            Self::Largest { .. } => OpCode::Largest,
            Self::Filter { .. } => OpCode::Filter,
            Self::FormatSize(_) => OpCode::FormatSize,
            Self::Report => OpCode::Report,
        }
    }
}

pub fn parse_pipeline<T>(args: impl IntoIterator<Item = T>) -> Result<Vec<Op>, ParseError>
where
    T: AsRef<str>,
{
    let mut ops = Vec::<(OpCode, Vec<String>)>::new();
    for arg in args {
        if let Some(oc) = OpCode::from_arg(arg.as_ref()) {
            ops.push((oc, vec![]))
        } else {
            let latest = ops
                .last_mut()
                .ok_or_else(|| ParseError::ArgBeforeFirstOp(arg.as_ref().into()))?;
            latest.1.push(arg.as_ref().into());
        }
    }
    ops.into_iter().map(|(oc, args)| oc.to_op(args)).collect()
}

/// A count for `--largest`. Negative numbers are as wrong as words.
pub fn parse_count(arg: &str) -> Result<usize, ParseError> {
    arg.trim()
        .parse()
        .map_err(|_| ParseError::InvalidCount(arg.to_owned()))
}

pub fn compile_pattern(pattern: &str) -> Result<Regex, ParseError> {
    Regex::new(pattern).map_err(|_| ParseError::InvalidPattern(pattern.to_owned()))
}

fn consume_param<T>(
    oc: &OpCode,
    name: &'static str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, ParseError>
where
    T: From<String>,
{
    let arg = args.next().ok_or_else(|| ParseError::MissingArg {
        oc: *oc,
        name: name,
    })?;

    Ok(arg.into())
}

fn optional_param(args: &mut impl Iterator<Item = String>) -> String {
    args.next().unwrap_or_default()
}

fn no_further_params(
    oc: &OpCode,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), ParseError> {
    let c = args.count();
    if c == 0 {
        Ok(())
    } else {
        Err(ParseError::TooManyArgs { oc: *oc, excess: c })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() -> Result<(), ParseError> {
        let cases = [
            (OpCode::Load, vec!["tree.json"]),
            (OpCode::Ext, vec!["pdf", "Documents"]),
            (OpCode::Largest, vec!["5"]),
            (OpCode::Filter, vec!["^a.*b$"]),
            (OpCode::FormatSize, vec!["1024"]),
        ];
        for (oc, args) in cases {
            let args = args.into_iter().map(|x| x.to_owned()).collect();
            let op = oc.to_op(args)?;
            assert_eq!(op.to_code(), oc);
        }
        Ok(())
    }

    #[test]
    fn oc_from_arg() {
        assert_eq!(OpCode::from_arg("--help"), None);
        assert_eq!(OpCode::from_arg(""), None);
        assert_eq!(OpCode::from_arg("some param"), None);
        assert_eq!(OpCode::from_arg("--NAME"), None);

        assert_eq!(OpCode::from_arg("--name-all"), Some(OpCode::NameAll));
        assert_eq!(OpCode::from_arg("--largest"), Some(OpCode::Largest));
    }

    #[test]
    fn parse() {
        assert_eq!(parse_pipeline([] as [&str; 0]), Ok(vec![]));
        assert_eq!(
            parse_pipeline(["--load"]),
            Err(ParseError::MissingArg {
                oc: OpCode::Load,
                name: "file",
            })
        );
        assert_eq!(
            parse_pipeline(["--list", "--size", "Documents"]),
            Ok(vec![Op::List("".into()), Op::Size("Documents".into())])
        );
        assert_eq!(
            parse_pipeline(["--ext", "pdf"]),
            Ok(vec![Op::Ext {
                ext: "pdf".into(),
                dir: "".into(),
            }])
        );
        assert_eq!(
            parse_pipeline(["--name-all", "project", "Documents"]),
            Ok(vec![Op::NameAll {
                pattern: "project".into(),
                dir: "Documents".into(),
            }])
        );
        assert_eq!(
            parse_pipeline(["--sample", "oh", "no"]),
            Err(ParseError::TooManyArgs {
                oc: OpCode::Sample,
                excess: 2,
            })
        );
        assert_eq!(
            parse_pipeline(["--types", "a", "b"]),
            Err(ParseError::TooManyArgs {
                oc: OpCode::Types,
                excess: 1,
            })
        );
        assert_eq!(
            parse_pipeline(["--report", "--report"]),
            Ok(vec![Op::Report, Op::Report])
        );
        assert_eq!(
            parse_pipeline(["Documents", "--list"]),
            Err(ParseError::ArgBeforeFirstOp("Documents".into()))
        );
    }

    #[test]
    fn parse_counts() {
        assert_eq!(
            parse_pipeline(["--largest", "3", "Downloads"]),
            Ok(vec![Op::Largest {
                n: 3,
                dir: "Downloads".into(),
            }])
        );
        assert_eq!(
            parse_pipeline(["--largest", "0"]),
            Ok(vec![Op::Largest {
                n: 0,
                dir: "".into(),
            }])
        );
        assert_eq!(
            parse_pipeline(["--largest", "-1"]),
            Err(ParseError::InvalidCount("-1".into()))
        );
        assert_eq!(
            parse_pipeline(["--largest", "five"]),
            Err(ParseError::InvalidCount("five".into()))
        );
        assert_eq!(
            parse_pipeline(["--largest", "2.5"]),
            Err(ParseError::InvalidCount("2.5".into()))
        );
    }

    #[test]
    fn parse_sizes_and_patterns() {
        assert_eq!(
            parse_pipeline(["--format-size", "-2048"]),
            Ok(vec![Op::FormatSize(-2048)])
        );
        assert_eq!(
            parse_pipeline(["--format-size", "big"]),
            Err(ParseError::InvalidSize("big".into()))
        );
        assert_eq!(
            parse_pipeline(["--filter", "(unclosed"]),
            Err(ParseError::InvalidPattern("(unclosed".into()))
        );
        assert_eq!(
            parse_pipeline(["--filter", r"\.pdf$", "Downloads"]),
            Ok(vec![Op::Filter {
                pattern: r"\.pdf$".into(),
                dir: "Downloads".into(),
            }])
        );
    }

    #[test]
    fn error_messages() {
        let e: std::io::Error = ParseError::InvalidCount("-1".into()).into();
        assert_eq!(e.to_string(), r#"Expected a count of zero or more, got "-1""#);
        assert_eq!(
            ParseError::MissingArg {
                oc: OpCode::Ext,
                name: "ext"
            }
            .to_string(),
            "Op Ext missing arg ext"
        );
    }
}
