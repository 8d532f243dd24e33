use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "envcheck",
    version,
    about = "Assert that environment variables hold the values a .env loader should produce"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Log loaded keys and every passing check")]
    pub debug: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "TOML file of checks replacing the built-in set"
    )]
    pub expectations: Option<PathBuf>,
    #[arg(
        long = "env-file",
        global = true,
        value_name = "PATH",
        help = "Load a .env file into the environment before checking (repeatable; check only)"
    )]
    pub env_files: Vec<PathBuf>,
    #[arg(
        long = "override",
        global = true,
        help = "Let --env-file values replace variables that are already set (check only)"
    )]
    pub override_existing: bool,
    #[arg(
        long,
        global = true,
        value_name = "KEY",
        help = "Key that must be defined and non-empty (repeatable)"
    )]
    pub required: Vec<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run every check against the environment (default)
    Check,
    /// Print the active checks without reading the environment
    List,
}
