//! # Feature Application Builder CLI
//!
//! This is the binary entry point for the `applicationbuilder` command-line
//! tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Running the build and translating any error into a log line and exit
//!   code 1. This is the only place the process exit status is decided.
//!
//! The core application logic is defined in the `lib.rs` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;

use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    let cli = match cli::Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if !e.use_stderr() {
                // --help and --version
                return ExitCode::SUCCESS;
            }
            cli::print_usage();
            return ExitCode::FAILURE;
        }
    };

    cli::init_logging(cli.verbose());
    info!("Apache Sling Feature Application Builder");
    info!("");

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
