//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use rdrtsp_cli::{CliError, run};

fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("rdrtsp: {:?}", eyre::Report::new(err));
            std::process::exit(1);
        }
    }
}
