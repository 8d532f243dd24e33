use crate::cli::Cli;
use crate::domain::models::ExpectationSet;
use crate::services::expectations::merge_required;
use crate::services::output::{print_json, print_rows};

pub fn handle_list(cli: &Cli, set: &ExpectationSet) -> anyhow::Result<()> {
    let set = merge_required(set, &cli.required)?;
    if cli.json {
        return print_json(true, &set);
    }
    print_rows(&set.required, |key| format!("required\t{key}"));
    print_rows(&set.expectations, |e| format!("{}\t{}", e.key, e.value));
    Ok(())
}
