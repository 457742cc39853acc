use crate::commands::{CmdMessage, CmdResult};
use crate::config::{FixConfig, CONFIG_FILENAME};
use crate::error::{Result, WsfixError};
use std::path::Path;

/// Write `config` to `.wsfix.json` in `dir`. Never overwrites.
pub fn run(dir: &Path, config: &FixConfig) -> Result<CmdResult> {
    let target = dir.join(CONFIG_FILENAME);
    if target.exists() {
        return Err(WsfixError::Config(format!(
            "{} already exists",
            target.display()
        )));
    }

    let written = config.save(dir)?;
    let mut result = CmdResult::default().with_config(config.clone());
    result.add_message(CmdMessage::success(format!(
        "Wrote {}",
        written.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_config() {
        let dir = tempdir().unwrap();
        let config = FixConfig::default().with_extension_glob("**/*.ts");

        let result = run(dir.path(), &config).unwrap();

        assert_eq!(result.config.as_ref(), Some(&config));
        assert_eq!(FixConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let err = run(dir.path(), &FixConfig::default()).unwrap_err();

        assert!(matches!(err, WsfixError::Config(_)));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap(),
            "{}"
        );
    }
}
