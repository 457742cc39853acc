use crate::commands::{CmdMessage, CmdResult};
use crate::config::FixConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::resolve::resolve;
use crate::store::TextStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    /// Rewrite files that have trailing whitespace.
    Write,
    /// Only report what would be rewritten.
    Check,
}

impl FixMode {
    fn verb(self) -> &'static str {
        match self {
            FixMode::Write => "Fixed",
            FixMode::Check => "Would fix",
        }
    }

    fn summary(self, count: usize) -> String {
        match self {
            FixMode::Write => format!("\nTotal files fixed: {}", count),
            FixMode::Check => format!("\nTotal files to fix: {}", count),
        }
    }
}

/// Resolve targets from `config` and normalize each one.
///
/// Only resolution errors are returned as `Err`. Read/write failures are
/// recorded per file in the result and the remaining files are still processed.
pub fn run<S: TextStore>(store: &mut S, config: &FixConfig, mode: FixMode) -> Result<CmdResult> {
    let resolved = resolve(store, config)?;
    Ok(process(store, resolved.targets(), mode))
}

/// Normalize an explicit sequence of paths, in order.
pub fn process<'a, S, I>(store: &mut S, targets: I, mode: FixMode) -> CmdResult
where
    S: TextStore,
    I: IntoIterator<Item = &'a PathBuf>,
{
    let mut result = CmdResult::default();
    let mut seen = 0;

    for path in targets {
        seen += 1;
        match fix_file(store, path, mode) {
            Ok(true) => {
                result.add_message(CmdMessage::success(format!(
                    "{}: {}",
                    mode.verb(),
                    path.display()
                )));
                result.fixed.push(path.clone());
            }
            Ok(false) => {}
            Err(e) => {
                debug!("{}", e);
                result.add_failure(path.clone(), e);
            }
        }
    }

    info!(
        "Processed {} files: {} to fix, {} failed",
        seen,
        result.fixed.len(),
        result.failures.len()
    );
    result.add_message(CmdMessage::info(mode.summary(result.fixed.len())));
    result
}

/// Returns true if the file had trailing whitespace. Writes only in
/// [`FixMode::Write`] and only when the content actually changed.
pub fn fix_file<S: TextStore>(store: &mut S, path: &Path, mode: FixMode) -> Result<bool> {
    let content = store.read_text(path)?;
    let outcome = normalize(&content);

    if !outcome.is_modified() {
        debug!("{} is clean", path.display());
        return Ok(false);
    }

    debug!(
        "{}: {} lines with trailing whitespace",
        path.display(),
        outcome.changed_lines
    );
    if mode == FixMode::Write {
        store.write_text(path, &outcome.content)?;
    }
    Ok(true)
}
