use super::TextStore;
use crate::error::{Result, WsfixError};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Records every write so callers can assert that unchanged files were left alone.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<PathBuf, String>,
    writes: Vec<PathBuf>,
    unreadable: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Paths written so far, in order, duplicates included.
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }

    /// Make reads of `path` fail with permission denied.
    pub fn deny_read(&mut self, path: impl Into<PathBuf>) {
        self.unreadable.insert(path.into());
    }

    /// Make writes to `path` fail with permission denied.
    pub fn deny_write(&mut self, path: impl Into<PathBuf>) {
        self.read_only.insert(path.into());
    }
}

fn permission_denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
}

impl TextStore for InMemoryStore {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        if self.unreadable.contains(path) {
            return Err(WsfixError::read(path, permission_denied()));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            WsfixError::read(path, io::Error::new(io::ErrorKind::NotFound, "not found"))
        })
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.contains(path) {
            return Err(WsfixError::write(path, permission_denied()));
        }
        if !self.files.contains_key(path) {
            return Err(WsfixError::write(
                path,
                io::Error::new(io::ErrorKind::NotFound, "not found"),
            ));
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        self.writes.push(path.to_path_buf());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_file(mut self, path: &str, content: &str) -> Self {
            self.store.insert(path, content);
            self
        }

        /// Adds `count` component files under `root`, half of them dirty.
        pub fn with_components(mut self, root: &str, count: usize) -> Self {
            for i in 0..count {
                let path = format!("{}/Component{}.vue", root, i + 1);
                let content = if i % 2 == 0 {
                    "<template>  \n  <div/>\n</template>\n"
                } else {
                    "<template>\n  <div/>\n</template>\n"
                };
                self.store.insert(path, content);
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
