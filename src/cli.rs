use crate::context::Context;
use crate::doc::usage;
use crate::logger::Logger;
use crate::nav::Navigator;
use crate::report::write_report;
use crate::sample::sample_tree;
use std::io::Write;
use std::process::ExitCode;

/// What we decide to do based on CLI arguments
#[derive(PartialEq, Debug)]
pub enum Behavior {
    Help,
    Version,
    Report,
    Pipeline(Vec<String>),
}

pub fn parse<S>(args: impl Iterator<Item = S>) -> Behavior
where
    S: AsRef<str>,
{
    let mut pipeline_args: Vec<String> = vec![];
    for arg in args {
        match arg.as_ref() {
            "--version" => return Behavior::Version,
            "--help" => return Behavior::Help,
            other => pipeline_args.push(other.to_owned()),
        }
    }

    if pipeline_args.is_empty() {
        Behavior::Help
    } else if pipeline_args == ["--report"] {
        Behavior::Report
    } else {
        Behavior::Pipeline(pipeline_args)
    }
}

pub fn run(behavior: Behavior, log: &mut Logger) -> std::io::Result<()> {
    match behavior {
        Behavior::Help => write!(log.stdout, "{}", usage()),
        Behavior::Version => write!(log.stdout, "{}\n", env!("CARGO_PKG_VERSION")),
        Behavior::Report => write_report(&Navigator::from(&sample_tree()), log),
        Behavior::Pipeline(args) => Context::new(log).parse_apply(args),
    }
}

pub fn execute(behavior: Behavior, log: &mut Logger) -> ExitCode {
    match run(behavior, log) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            write!(log.stderr, "Failed to execute: {}\n", e)
                .expect("Failed to print failure msg");
            ExitCode::from(1)
        }
    }
}
