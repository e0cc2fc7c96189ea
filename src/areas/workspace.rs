//! Working tree access
//!
//! Paths handed in and out of the workspace are repository-relative strings
//! using `/` as separator, the same keys the index uses.

use crate::areas::repository::METADATA_DIR;
use crate::errors::{LitError, LitResult};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Only the metadata directory at the root is skipped, not nested ones
    fn is_ignored(relative: &Path) -> bool {
        let mut components = relative.components();

        matches!(components.next(), Some(Component::Normal(name)) if name.to_str() == Some(METADATA_DIR))
            && components.next().is_none()
    }

    fn to_relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        let segments = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>();

        (!segments.is_empty()).then(|| segments.join("/"))
    }

    fn absolute(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    /// Every regular file below the root, sorted, skipping the metadata directory
    pub fn list_files(&self) -> LitResult<Vec<String>> {
        let mut files = Vec::new();

        let root = self.path.clone();
        let walker = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                !entry
                    .path()
                    .strip_prefix(&root)
                    .is_ok_and(Self::is_ignored)
            });

        for entry in walker {
            let entry = entry.map_err(|err| {
                err.into_io_error()
                    .map(LitError::from)
                    .unwrap_or_else(|| LitError::InvalidPath("filesystem loop".to_string()))
            })?;

            if entry.file_type().is_file()
                && let Some(relative) = self.to_relative(entry.path())
            {
                files.push(relative);
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn read_file(&self, file_path: &str) -> LitResult<Vec<u8>> {
        Ok(std::fs::read(self.absolute(file_path))?)
    }

    /// Write a file, creating its parent directories.
    ///
    /// Returns whether a file that was already there got replaced. A directory
    /// in the way is only removed when no file lives below it.
    pub fn write_file(&self, file_path: &str, content: &[u8]) -> LitResult<bool> {
        let path = self.absolute(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let existed = path.is_file();
        if path.is_dir() {
            if Self::contains_files(&path) {
                return Err(LitError::AlreadyExists(format!("directory {file_path}")));
            }
            std::fs::remove_dir_all(&path)?;
        }
        std::fs::write(&path, content)?;

        Ok(existed)
    }

    /// Remove a file if present, then prune the directories it leaves empty
    pub fn remove_file(&self, file_path: &str) -> LitResult<()> {
        let path = self.absolute(file_path);

        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        self.prune_empty_parent_dirs(&path)
    }

    fn contains_files(dir: &Path) -> bool {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .any(|entry| !entry.file_type().is_dir())
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> LitResult<()> {
        let mut current = path.parent();

        while let Some(dir) = current
            && dir != self.path.as_ref()
            && dir.starts_with(self.path.as_ref())
        {
            let is_empty =
                std::fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_none());
            if !is_empty {
                break;
            }

            std::fs::remove_dir(dir)?;
            current = dir.parent();
        }

        Ok(())
    }
}
