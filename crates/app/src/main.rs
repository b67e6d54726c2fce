//! PTF command-line host.
//!
//! Runs the test helpers outside an API client: one invocation per
//! script execution, with globals persisted to a JSON file in between.

mod cli;
mod commands;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;

use cli::{Args, Command};
use commands::Outcome;
use config::Settings;
use error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    config::init_tracing();

    let args = Args::parse();
    let settings = Settings::resolve(args.globals.clone());

    match run(&settings, &args.command).await {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

async fn run(settings: &Settings, command: &Command) -> Result<Outcome, CliError> {
    match command {
        Command::Slugify { text } => Ok(commands::slugify_text(text)),
        Command::DecodeToken { token } => commands::decode_token(token),
        Command::Replay(replay) => commands::replay(&settings.globals_path, replay).await,
        Command::ValidateOptions(validate) => commands::validate_options(validate).await,
        Command::Globals(globals) => commands::globals(&settings.globals_path, globals).await,
    }
}
