mod cli;
mod commands;
mod domain;
mod services;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_check, handle_list};
use services::expectations::load_expectations;
use services::logging::init_logging;
use services::output::print_json;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            if cli.json {
                let data = serde_json::json!({ "error": format!("{err:#}") });
                if let Err(write_err) = print_json(false, data) {
                    tracing::error!("failed to write JSON error report: {write_err:#}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let set = load_expectations(cli.expectations.as_deref())?;
    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => handle_check(cli, &set),
        Commands::List => {
            handle_list(cli, &set)?;
            Ok(true)
        }
    }
}
