use super::TextStore;
use crate::error::{Result, WsfixError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Filesystem-backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    follow_links: bool,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self { follow_links: true }
    }

    /// Whether directory symlinks are descended into while listing.
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl TextStore for FileStore {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            debug!("Scan root {} is not a directory", root.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
            {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| WsfixError::read(path, e))
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        // Write through symlinks: the link stays, its target gets the content.
        let target = fs::canonicalize(path).map_err(|e| WsfixError::write(path, e))?;
        let metadata = fs::metadata(&target).map_err(|e| WsfixError::write(path, e))?;

        if has_other_links(&metadata) {
            // A rename would detach this name from the other hard links.
            debug!("{} has other hard links, writing in place", path.display());
            return fs::write(&target, content).map_err(|e| WsfixError::write(path, e));
        }

        let mut tmp = NamedTempFile::new_in(Self::parent_dir(&target))
            .map_err(|e| WsfixError::write(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| WsfixError::write(path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| WsfixError::write(path, e))?;
        fs::set_permissions(tmp.path(), metadata.permissions())
            .map_err(|e| WsfixError::write(path, e))?;
        copy_ownership(tmp.path(), &metadata);
        tmp.persist(&target)
            .map_err(|e| WsfixError::write(path, e.error))?;

        Ok(())
    }
}

#[cfg(unix)]
fn has_other_links(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &fs::Metadata) -> bool {
    false
}

/// Best effort: only root can hand a file to another user.
#[cfg(unix)]
fn copy_ownership(tmp: &Path, metadata: &fs::Metadata) {
    use std::os::unix::fs::MetadataExt;
    if let Err(e) = std::os::unix::fs::chown(tmp, Some(metadata.uid()), Some(metadata.gid())) {
        debug!("Could not copy ownership to {}: {}", tmp.display(), e);
    }
}

#[cfg(not(unix))]
fn copy_ownership(_tmp: &Path, _metadata: &fs::Metadata) {}
