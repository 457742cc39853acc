//! # wsfix Architecture
//!
//! wsfix strips trailing whitespace from a configured set of project files: every
//! file under a root directory that matches a glob, plus a list of extra paths
//! that are included when they exist.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints reports        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the effective FixConfig               │
//! │  - Dispatches to commands, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, resolve.rs)                  │
//! │  - Path resolution, per-file fix/check, failure collection  │
//! │  - normalize.rs holds the pure line transformation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TextStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure policy
//!
//! A bad pattern or config aborts before any file is touched. Once targets are
//! resolved, each file is independent: a read or write failure is recorded in
//! the [`commands::CmdResult`] and the run moves on to the next path.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: fix/check, list and init
//! - [`resolve`]: Glob pass plus extra paths
//! - [`pattern`]: Glob parsing and matching
//! - [`normalize`]: Trailing-whitespace removal on a line sequence
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `.wsfix.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pattern;
pub mod resolve;
pub mod store;
