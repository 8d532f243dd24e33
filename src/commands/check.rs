use crate::cli::Cli;
use crate::domain::constants::SUCCESS_MESSAGE;
use crate::domain::models::{CheckReport, ExpectationSet};
use crate::services::assertion::{process_env, run_checks};
use crate::services::expectations::merge_required;
use crate::services::loader::load_env_files;
use crate::services::output::print_json;
use tracing::{error, info};

/// Returns whether every check passed. A failed check is logged here and is
/// not an `Err`; errors are reserved for load and configuration failures.
pub fn handle_check(cli: &Cli, set: &ExpectationSet) -> anyhow::Result<bool> {
    let set = merge_required(set, &cli.required)?;

    let mut report = CheckReport {
        loaded: load_env_files(&cli.env_files, cli.override_existing)?,
        ..Default::default()
    };

    let outcome = run_checks(
        &set.required,
        &set.expectations,
        process_env,
        &mut report.passed,
    );
    match outcome {
        Ok(()) => info!("{SUCCESS_MESSAGE}"),
        Err(err) => {
            error!("{err}");
            report.failure = Some(err);
        }
    }

    if cli.json {
        print_json(report.ok(), &report)?;
    }
    Ok(report.ok())
}
