use crate::domain::models::{CheckError, Expectation};
use tracing::debug;

/// Reads `key` from the process environment.
///
/// Values that are not valid unicode are compared by their lossy rendering.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
}

/// Compares the live value of `expectation.key` against the expected literal.
/// An absent variable reads as the empty string.
pub fn assert_env<F>(expectation: &Expectation, lookup: F) -> Result<(), CheckError>
where
    F: Fn(&str) -> Option<String>,
{
    let actual = lookup(&expectation.key).unwrap_or_default();
    if actual != expectation.value {
        return Err(CheckError::Mismatch {
            key: expectation.key.clone(),
            expected: expectation.value.clone(),
            actual,
        });
    }
    Ok(())
}

/// Collects every required key that is absent or empty.
pub fn check_required<F>(keys: &[String], lookup: F) -> Result<(), CheckError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing: Vec<String> = Vec::new();
    for key in keys {
        let defined = lookup(key).map(|v| !v.is_empty()).unwrap_or(false);
        if !defined && !missing.contains(key) {
            missing.push(key.clone());
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CheckError::MissingRequired { keys: missing })
    }
}

/// Runs the required-key gate, then each expectation in order, stopping at
/// the first failure. Keys of passing expectations are appended to `passed`.
pub fn run_checks<F>(
    required: &[String],
    expectations: &[Expectation],
    lookup: F,
    passed: &mut Vec<String>,
) -> Result<(), CheckError>
where
    F: Fn(&str) -> Option<String>,
{
    check_required(required, &lookup)?;
    for expectation in expectations {
        assert_env(expectation, &lookup)?;
        debug!(key = %expectation.key, "check passed");
        passed.push(expectation.key.clone());
    }
    Ok(())
}
