//! Service layer containing check logic and side-effect helpers.
//!
//! ## Service map
//! - `assertion.rs` — required-key gate and the ordered `key == value` runner.
//! - `expectations.rs` — built-in set / TOML expectation file loading + key validation.
//! - `loader.rs` — applies dotenvy-parsed `.env` files to the process environment.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Environment reads go through an injected lookup so checks stay pure.
//! - Environment writes happen only in `loader.rs`, before any check runs.

pub mod assertion;
pub mod expectations;
pub mod loader;
pub mod logging;
pub mod output;
