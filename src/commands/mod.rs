//! Command handler layer.
//!
//! ## Files
//! - `check.rs` — preload env files, run the required gate and the checks.
//! - `list.rs` — print the active expectation set.
//!
//! ## Principles
//! - Match CLI inputs here.
//! - Delegate check logic to `services/*`.
//! - Keep log lines and `--json` output stable.

pub mod check;
pub mod list;

pub use check::handle_check;
pub use list::handle_list;
