//! catalogd entry point
//!
//! Parses arguments, dispatches to the CLI, prints errors to stderr and
//! exits non-zero on failure. All logic lives in the `cli` module.

use catalogd::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
