//! # Path Resolution
//!
//! Builds the ordered list of files to normalize from two sources:
//!
//! 1. Files under `root_dir` matching `extension_glob`, in walk order
//! 2. `extra_paths` that exist right now, in listed order
//!
//! A missing extra path is policy, not an error: config files are shared
//! across project variants that don't all carry every file. Duplicates are
//! kept. A file reached by both sources is normalized twice, and the second
//! pass is a no-op.

use crate::config::FixConfig;
use crate::error::Result;
use crate::pattern::FilePattern;
use crate::store::TextStore;
use std::path::PathBuf;
use tracing::debug;

/// Resolved target paths, glob matches first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub matched: Vec<PathBuf>,
    pub extras: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl ResolvedPaths {
    /// All targets in processing order.
    pub fn targets(&self) -> impl Iterator<Item = &PathBuf> {
        self.matched.iter().chain(self.extras.iter())
    }

    pub fn len(&self) -> usize {
        self.matched.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_targets(self) -> Vec<PathBuf> {
        let mut all = self.matched;
        all.extend(self.extras);
        all
    }
}

pub fn resolve<S: TextStore>(store: &S, config: &FixConfig) -> Result<ResolvedPaths> {
    let pattern = config.pattern()?;
    let matched = glob_pass(store, config, &pattern)?;

    let mut extras = Vec::new();
    let mut skipped = Vec::new();
    for path in &config.extra_paths {
        if store.is_file(path) {
            extras.push(path.clone());
        } else {
            debug!("Skipping missing extra path {}", path.display());
            skipped.push(path.clone());
        }
    }

    debug!(
        "Resolved {} glob matches and {} extra paths ({} skipped)",
        matched.len(),
        extras.len(),
        skipped.len()
    );

    Ok(ResolvedPaths {
        matched,
        extras,
        skipped,
    })
}

fn glob_pass<S: TextStore>(
    store: &S,
    config: &FixConfig,
    pattern: &FilePattern,
) -> Result<Vec<PathBuf>> {
    let root = &config.root_dir;
    let files = store.list_files(root)?;

    Ok(files
        .into_iter()
        .filter(|path| {
            path.strip_prefix(root)
                .map(|rel| pattern.matches(rel))
                .unwrap_or(false)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WsfixError;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config(extra: &[&str]) -> FixConfig {
        FixConfig::new(
            "components",
            "**/*.vue",
            extra.iter().map(PathBuf::from).collect(),
        )
    }

    #[test]
    fn test_glob_matches_first_then_extras_in_order() {
        let store = StoreFixture::new()
            .with_file("components/App.vue", "")
            .with_file("components/forms/Input.vue", "")
            .with_file("components/forms/input.js", "")
            .with_file("esbuild.config.js", "")
            .with_file("layout.haml", "")
            .build();

        let resolved = resolve(&store, &config(&["layout.haml", "esbuild.config.js"])).unwrap();
        let targets: Vec<_> = resolved.into_targets();
        assert_eq!(
            targets,
            vec![
                PathBuf::from("components/App.vue"),
                PathBuf::from("components/forms/Input.vue"),
                PathBuf::from("layout.haml"),
                PathBuf::from("esbuild.config.js"),
            ]
        );
    }

    #[test]
    fn test_missing_extras_are_skipped() {
        let store = StoreFixture::new().with_file("present.js", "").build();
        let resolved = resolve(&store, &config(&["missing.js", "present.js"])).unwrap();
        assert_eq!(resolved.extras, vec![PathBuf::from("present.js")]);
        assert_eq!(resolved.skipped, vec![PathBuf::from("missing.js")]);
    }

    #[test]
    fn test_empty_match_set_is_ok() {
        let store = StoreFixture::new().build();
        let resolved = resolve(&store, &config(&[])).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store = StoreFixture::new()
            .with_file("components/App.vue", "")
            .build();
        let resolved = resolve(&store, &config(&["components/App.vue"])).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.matched, resolved.extras);
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let store = StoreFixture::new().build();
        let cfg = config(&[]).with_extension_glob("**");
        assert!(matches!(
            resolve(&store, &cfg),
            Err(WsfixError::Pattern { .. })
        ));
    }

    #[test]
    fn test_filesystem_resolution_is_exact() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("components");
        let expected: BTreeSet<PathBuf> = ["A.vue", "x/B.vue", "x/y/C.vue", "x/y/z/D.vue"]
            .iter()
            .map(|rel| root.join(rel))
            .collect();
        for path in &expected {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "<template/>\n").unwrap();
        }
        fs::write(root.join("x/notes.md"), "").unwrap();
        fs::write(root.join("x/B.vue.orig"), "").unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        fs::write(root.join(".cache/Hidden.vue"), "").unwrap();

        let cfg = FixConfig::new(&root, "**/*.vue", vec![dir.path().join("absent.js")]);
        let resolved = resolve(&FileStore::new(), &cfg).unwrap();

        let got: BTreeSet<PathBuf> = resolved.matched.iter().cloned().collect();
        assert_eq!(got, expected);
        assert_eq!(resolved.matched.len(), expected.len());
        assert!(resolved.extras.is_empty());
        assert_eq!(resolved.skipped, vec![dir.path().join("absent.js")]);
    }

    #[test]
    fn test_filesystem_missing_root() {
        let dir = tempdir().unwrap();
        let cfg = FixConfig::new(dir.path().join("nope"), "**/*.vue", vec![]);
        let resolved = resolve(&FileStore::new(), &cfg).unwrap();
        assert!(resolved.is_empty());
        assert!(!Path::new(&cfg.root_dir).exists());
    }
}
