use crate::error::{Result, WsfixError};
use crate::pattern::FilePattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".wsfix.json";
const DEFAULT_ROOT_DIR: &str = "app/javascript/components";
const DEFAULT_EXTENSION_GLOB: &str = "**/*.vue";

/// What to scan, stored in `.wsfix.json`.
///
/// Paths are relative to the working directory the tool runs in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixConfig {
    /// Directory the glob is evaluated against
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// File selector relative to `root_dir` (e.g. "**/*.vue")
    #[serde(default = "default_extension_glob")]
    pub extension_glob: String,

    /// Extra files to normalize when they exist. Missing entries are skipped
    /// so one list can serve several project layouts.
    #[serde(default = "default_extra_paths")]
    pub extra_paths: Vec<PathBuf>,
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_DIR)
}

fn default_extension_glob() -> String {
    DEFAULT_EXTENSION_GLOB.to_string()
}

fn default_extra_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("app/views/layouts/application.html.haml"),
        PathBuf::from("config/environments/test.rb.database_config"),
        PathBuf::from("esbuild.config.js"),
    ]
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            extension_glob: default_extension_glob(),
            extra_paths: default_extra_paths(),
        }
    }
}

impl FixConfig {
    pub fn new(
        root_dir: impl Into<PathBuf>,
        extension_glob: impl Into<String>,
        extra_paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            extension_glob: extension_glob.into(),
            extra_paths,
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(config_path)
    }

    /// Load config from an explicit file, which must exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(WsfixError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| WsfixError::read(path, e))?;
        let config: FixConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, returning the written path
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| WsfixError::write(&config_path, e))?;
        Ok(config_path)
    }

    /// Parse the configured glob
    pub fn pattern(&self) -> Result<FilePattern> {
        FilePattern::parse(&self.extension_glob)
    }

    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    pub fn with_extension_glob(mut self, glob: impl Into<String>) -> Self {
        self.extension_glob = glob.into();
        self
    }

    pub fn with_extra_paths(mut self, extra_paths: Vec<PathBuf>) -> Self {
        self.extra_paths = extra_paths;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = FixConfig::default();
        assert_eq!(config.root_dir, PathBuf::from("app/javascript/components"));
        assert_eq!(config.extension_glob, "**/*.vue");
        assert_eq!(config.extra_paths.len(), 3);
        assert!(config.pattern().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = FixConfig::load(dir.path()).unwrap();
        assert_eq!(config, FixConfig::default());
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let dir = tempdir().unwrap();
        let err = FixConfig::load_file(dir.path().join("custom.json")).unwrap_err();
        assert!(matches!(err, WsfixError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config = FixConfig::new("src", "**/*.rs", vec![PathBuf::from("build.rs")]);
        let written = config.save(dir.path()).unwrap();
        assert_eq!(written, dir.path().join(CONFIG_FILENAME));

        let loaded = FixConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "extension_glob": "**/*.ts" }"#,
        )
        .unwrap();

        let config = FixConfig::load(dir.path()).unwrap();
        assert_eq!(config.extension_glob, "**/*.ts");
        assert_eq!(config.root_dir, default_root_dir());
        assert_eq!(config.extra_paths, default_extra_paths());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        let err = FixConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, WsfixError::Serialization(_)));
    }

    #[test]
    fn test_builders_override() {
        let config = FixConfig::default()
            .with_root_dir("web")
            .with_extension_glob("*.html")
            .with_extra_paths(vec![]);
        assert_eq!(config.root_dir, PathBuf::from("web"));
        assert_eq!(config.extension_glob, "*.html");
        assert!(config.extra_paths.is_empty());
    }
}
