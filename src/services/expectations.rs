use crate::domain::models::{ExpectationError, ExpectationSet};
use anyhow::Context;
use std::path::Path;

/// Resolves the active expectation set: the TOML file at `path` when given,
/// otherwise the built-in checks.
pub fn load_expectations(path: Option<&Path>) -> anyhow::Result<ExpectationSet> {
    let Some(path) = path else {
        return Ok(ExpectationSet::builtin());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read expectations file {}", path.display()))?;
    parse_expectations(&raw)
        .with_context(|| format!("invalid expectations file {}", path.display()))
}

pub fn parse_expectations(raw: &str) -> anyhow::Result<ExpectationSet> {
    let set: ExpectationSet = toml::from_str(raw)?;
    for key in set
        .required
        .iter()
        .chain(set.expectations.iter().map(|e| &e.key))
    {
        validate_key(key)?;
    }
    Ok(set)
}

/// Appends the `--required` keys to the set's own required keys, validating
/// each one.
pub fn merge_required(
    set: &ExpectationSet,
    extra: &[String],
) -> anyhow::Result<ExpectationSet> {
    let mut merged = set.clone();
    for key in extra {
        validate_key(key)?;
        merged.required.push(key.clone());
    }
    Ok(merged)
}

pub fn validate_key(key: &str) -> Result<(), ExpectationError> {
    if key.is_empty() {
        return Err(ExpectationError::EmptyKey);
    }
    if key.contains('=') || key.contains('\0') {
        return Err(ExpectationError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}
