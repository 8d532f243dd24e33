use crate::domain::constants::DEFAULT_EXPECTATIONS;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One `key == value` assertion against the process environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    pub key: String,
    pub value: String,
}

impl Expectation {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered checks plus the keys that only have to be present.
///
/// This is also the on-disk shape of an `--expectations` TOML file, where
/// checks are written as `[[expect]]` tables.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct ExpectationSet {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default, rename = "expect")]
    pub expectations: Vec<Expectation>,
}

impl ExpectationSet {
    pub fn builtin() -> Self {
        Self {
            required: Vec::new(),
            expectations: DEFAULT_EXPECTATIONS
                .iter()
                .map(|(key, value)| Expectation::new(*key, *value))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckError {
    #[error("Expected the key \"{key}\" value to match \"{expected}\". Actual value: \"{actual}\"")]
    Mismatch {
        key: String,
        expected: String,
        actual: String,
    },
    #[error(
        "The following ENVs are marked as required: {}, but they are undefined.",
        quote_keys(.keys)
    )]
    MissingRequired { keys: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpectationError {
    #[error("expectation key must not be empty")]
    EmptyKey,
    #[error("expectation key {key:?} must not contain '=' or NUL")]
    InvalidKey { key: String },
}

fn quote_keys(keys: &[String]) -> String {
    keys.iter()
        .map(|k| format!("'{k}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a `check` run; serialized as the `data` of `--json` output.
#[derive(Debug, Serialize, Default)]
pub struct CheckReport {
    pub loaded: Vec<FileLoadReport>,
    pub passed: Vec<String>,
    pub failure: Option<CheckError>,
}

impl CheckReport {
    pub fn ok(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FileLoadReport {
    pub path: String,
    pub loaded: Vec<String>,
    /// Keys already present in the environment and left untouched.
    pub skipped: Vec<String>,
}
