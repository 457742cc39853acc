//! # Command Layer
//!
//! Business logic for each operation. Commands take a store and plain Rust
//! arguments and return a [`CmdResult`]; they never print. Per-file problems are
//! collected in the result instead of aborting, so a run always consumes every
//! resolved path.

use crate::config::FixConfig;
use crate::error::WsfixError;
use std::path::PathBuf;

pub mod fix;
pub mod init;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A file that could not be read or written.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: WsfixError,
}

impl FileFailure {
    /// The cause without the path, for "Error: <path>: <cause>" lines.
    pub fn cause(&self) -> String {
        match self.error.io_cause() {
            Some(io) => io.to_string(),
            None => self.error.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files that were (or, in check mode, would be) rewritten, in order.
    pub fixed: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub listed: Vec<PathBuf>,
    pub config: Option<FixConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_failure(&mut self, path: PathBuf, error: WsfixError) {
        let failure = FileFailure { path, error };
        self.add_message(CmdMessage::error(format!(
            "Error: {}: {}",
            failure.path.display(),
            failure.cause()
        )));
        self.failures.push(failure);
    }

    pub fn with_listed(mut self, paths: Vec<PathBuf>) -> Self {
        self.listed = paths;
        self
    }

    pub fn with_config(mut self, config: FixConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn fixed_count(&self) -> usize {
        self.fixed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
