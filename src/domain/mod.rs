//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — expectations, reports, JSON envelope, typed check failures.
//! - `constants.rs` — the built-in expectation set and stable messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or environment access.
//!
//! ## Compatibility note
//! `CheckReport` and `Failure` are the `--json` output schema. Keep field
//! renames explicit.

pub mod constants;
pub mod models;
