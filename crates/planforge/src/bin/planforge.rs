use std::process::ExitCode;

use clap::Parser;
use planforge::cli::{self, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();
    planforge::console::init();

    match cli::run(&args) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
