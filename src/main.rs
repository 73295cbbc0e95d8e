use ans_claims_processor::Error;
use ans_claims_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    commands::setup_logging();

    let result = commands::run(args);
    let status = commands::exit_status(&result);

    match result {
        Ok(_) => {}
        Err(Error::NoInputFiles { .. }) => {
            eprintln!("\nERROR: No CSV file found in the current directory");
            eprintln!("Place the ANS quarterly statement files here and run again.");
        }
        Err(error) => eprintln!("\nERROR: {:#}", anyhow::Error::from(error)),
    }

    ExitCode::from(status)
}
