//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::error::Error as _;

fn main() {
    env_logger::init();
    if let Err(err) = trailwise_cli::run() {
        if let trailwise_cli::CliError::ArgumentParsing(usage) = &err {
            usage.exit();
        }
        report(&err);
        std::process::exit(1);
    }
}

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn report(err: &trailwise_cli::CliError) {
    eprintln!("trailwise: {err}");
    let mut cause = err.source();
    while let Some(inner) = cause {
        eprintln!("  caused by: {inner}");
        cause = inner.source();
    }
}
