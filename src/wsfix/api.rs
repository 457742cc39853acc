//! # API Facade
//!
//! Thin layer over the commands. It owns the store and the effective
//! configuration and dispatches; it holds no normalization logic and never
//! prints.
//!
//! `WsfixApi<S: TextStore>` is generic over storage:
//! - Production: `WsfixApi<FileStore>`
//! - Testing: `WsfixApi<InMemoryStore>`

use crate::commands::{self, fix::FixMode, CmdResult};
use crate::config::FixConfig;
use crate::error::Result;
use crate::resolve::{self, ResolvedPaths};
use crate::store::TextStore;
use std::path::Path;

pub use crate::commands::{CmdMessage, FileFailure, MessageLevel};

pub struct WsfixApi<S: TextStore> {
    store: S,
    config: FixConfig,
}

impl<S: TextStore> WsfixApi<S> {
    pub fn new(store: S, config: FixConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve(&self) -> Result<ResolvedPaths> {
        resolve::resolve(&self.store, &self.config)
    }

    /// Strip trailing whitespace from every resolved file.
    pub fn fix(&mut self) -> Result<CmdResult> {
        commands::fix::run(&mut self.store, &self.config, FixMode::Write)
    }

    /// Report files that `fix` would rewrite, without writing.
    pub fn check(&mut self) -> Result<CmdResult> {
        commands::fix::run(&mut self.store, &self.config, FixMode::Check)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.config)
    }

    /// Persist the effective configuration into `dir`.
    pub fn init(&self, dir: &Path) -> Result<CmdResult> {
        commands::init::run(dir, &self.config)
    }
}
