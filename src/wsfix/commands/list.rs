use crate::commands::{CmdMessage, CmdResult};
use crate::config::FixConfig;
use crate::error::Result;
use crate::resolve::resolve;
use crate::store::TextStore;

/// Resolve targets without reading or writing any of them.
pub fn run<S: TextStore>(store: &S, config: &FixConfig) -> Result<CmdResult> {
    let resolved = resolve(store, config)?;

    let mut result = CmdResult::default();
    for skipped in &resolved.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped (missing): {}",
            skipped.display()
        )));
    }

    Ok(result.with_listed(resolved.into_targets()))
}
