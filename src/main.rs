//! helpdeskd CLI entry point
//!
//! Minimal entrypoint that delegates to the cli module: parse
//! arguments, dispatch, print errors to stderr, exit non-zero on
//! failure.

use helpdeskd::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
