use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsfixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl WsfixError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WsfixError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WsfixError::Write {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O cause, without the path prefix.
    pub fn io_cause(&self) -> Option<&std::io::Error> {
        match self {
            WsfixError::Io(e) => Some(e),
            WsfixError::Read { source, .. } | WsfixError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WsfixError>;
