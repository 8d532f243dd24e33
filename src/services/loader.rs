use crate::domain::models::FileLoadReport;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Parses `path` with dotenvy and writes each pair into the process
/// environment. Keys that are already set to a non-empty value are left
/// alone unless `override_existing` is true.
///
/// Must run before any check reads the environment.
pub fn load_env_file(path: &Path, override_existing: bool) -> anyhow::Result<FileLoadReport> {
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("failed to open env file {}", path.display()))?;

    let mut report = FileLoadReport {
        path: path.display().to_string(),
        ..Default::default()
    };
    for item in iter {
        let (key, value) =
            item.with_context(|| format!("failed to parse env file {}", path.display()))?;
        let defined = std::env::var_os(&key).is_some_and(|v| !v.is_empty());
        if !override_existing && defined {
            warn!(
                file = %path.display(),
                "The '{key}' key is already defined in the environment. Pass --override to replace it. Skipping."
            );
            report.skipped.push(key);
            continue;
        }
        std::env::set_var(&key, value);
        report.loaded.push(key);
    }

    debug!(
        file = %path.display(),
        loaded = report.loaded.len(),
        skipped = report.skipped.len(),
        "loaded env file"
    );
    debug!(file = %path.display(), "loaded keys: {}", report.loaded.join(", "));
    Ok(report)
}

/// Loads each file in order; the first failure aborts the rest.
pub fn load_env_files(
    paths: &[PathBuf],
    override_existing: bool,
) -> anyhow::Result<Vec<FileLoadReport>> {
    paths
        .iter()
        .map(|p| load_env_file(p, override_existing))
        .collect()
}
