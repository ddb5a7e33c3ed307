use std::env::args;
use std::process::ExitCode;
use treenav::{cli, logger::Logger};

fn main() -> ExitCode {
    let mut logger = Logger::new_real();
    let behavior = cli::parse(args().skip(1));
    cli::execute(behavior, &mut logger)
}
