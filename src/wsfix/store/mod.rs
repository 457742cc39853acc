//! # Storage Layer
//!
//! Normalization never touches the filesystem directly. Everything goes through
//! the [`TextStore`] trait, which lets the same command code run against:
//!
//! - [`fs::FileStore`]: the real filesystem (walkdir for traversal, temp-file
//!   swaps for writes)
//! - [`memory::InMemoryStore`]: a map of path → content, used by tests to
//!   observe exactly which writes happened
//!
//! Paths are passed through untouched. A store never canonicalizes, so whatever
//! the resolver hands in is what ends up in reports.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for reading and rewriting text files.
pub trait TextStore {
    /// True if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Every regular file below `root`, recursively, as `root.join(relative)`.
    ///
    /// A missing root yields an empty list. Entries that cannot be read during
    /// the walk are skipped.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Read the full content of a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Replace the content of a file. Readers see either the old or the new
    /// content, never a mix.
    fn write_text(&mut self, path: &Path, content: &str) -> Result<()>;
}
