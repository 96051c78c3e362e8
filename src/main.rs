use clap::Parser;
use ruok_commands::{Cli, RuokCommand};
use ruok_utils::term::print_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Cli::parse().invoke().map_err(|e| e.to_string()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(e) = print_error(&e) {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}
