use std::process::ExitCode;

use clap::Parser;
use pulitzer_deploy::args::Args;
use pulitzer_deploy::main_inner;

fn main() -> ExitCode {
    let args = Args::parse();

    match main_inner(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
