//! # CLI Behavior
//!
//! The CLI is the only place that knows about terminal I/O, logging setup and
//! exit codes. For the overall architecture see the library docs.
//!
//! ## Modes
//!
//! - `wsfix`: rewrite every resolved file that has trailing whitespace
//! - `wsfix --check`: report, never write
//! - `wsfix --list`: print the resolved targets
//! - `wsfix --init`: write the effective configuration to `.wsfix.json`
//!
//! ## Output
//!
//! Reports go to stdout (`Fixed: <path>` lines, then `Total files fixed: <n>`).
//! Per-file failures go to stderr as `Error: <path>: <cause>`. Logs also go to
//! stderr and are controlled by `RUST_LOG` or `--verbose`.
//!
//! ## Exit codes
//!
//! - `0`: every target processed (whether or not anything changed)
//! - `1`: a fatal error, at least one per-file failure, or `--check` found
//!   files that need fixing

mod commands;
mod print;
mod setup;

pub use commands::run;
