use super::print::{print_messages, print_paths};
use super::setup::{init_logging, Cli};
use clap::Parser;
use std::path::Path;
use tracing::debug;
use wsfix::api::WsfixApi;
use wsfix::commands::CmdResult;
use wsfix::config::FixConfig;
use wsfix::error::{Result, WsfixError};
use wsfix::store::fs::FileStore;

/// How a run ended, for the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// `--check` found files with trailing whitespace.
    NeedsFix,
    /// At least one file could not be read or written.
    FileErrors,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::NeedsFix | Outcome::FileErrors => 1,
        }
    }
}

pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            WsfixError::Config(format!("Cannot change to {}: {}", dir.display(), e))
        })?;
    }

    let config = load_config(&cli)?;
    debug!("Effective config: {:?}", config);
    let mut api = WsfixApi::new(FileStore::new(), config);

    if cli.init {
        let result = api.init(Path::new("."))?;
        print_messages(&result.messages);
        return Ok(Outcome::Clean);
    }

    if cli.list {
        let result = api.list()?;
        print_messages(&result.messages);
        print_paths(&result.listed);
        return Ok(Outcome::Clean);
    }

    let result = if cli.check { api.check()? } else { api.fix()? };
    print_messages(&result.messages);
    Ok(outcome(&result, cli.check))
}

fn outcome(result: &CmdResult, check: bool) -> Outcome {
    if result.has_failures() {
        Outcome::FileErrors
    } else if check && result.fixed_count() > 0 {
        Outcome::NeedsFix
    } else {
        Outcome::Clean
    }
}

/// Config file first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<FixConfig> {
    let mut config = match &cli.config {
        Some(path) => FixConfig::load_file(path)?,
        None => FixConfig::load(".")?,
    };

    if let Some(root) = &cli.root {
        config = config.with_root_dir(root);
    }
    if let Some(pattern) = &cli.pattern {
        config = config.with_extension_glob(pattern);
    }
    if !cli.extra.is_empty() {
        config = config.with_extra_paths(cli.extra.clone());
    }

    // Fail on a bad glob before anything else happens.
    config.pattern()?;
    Ok(config)
}
