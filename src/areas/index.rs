//! Staging index
//!
//! The index tracks which blob each path will have in the next commit. It is
//! loaded and rewritten as a whole; `changed` records whether there is
//! anything to write back.

use crate::artifacts::index::{FlatIndex, is_sub_path, parent_dirs};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LitResult;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.lit/index`)
    path: Box<Path>,
    entries: FlatIndex,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: FlatIndex::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing or empty file loads as an empty index.
    pub fn rehydrate(&mut self) -> LitResult<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read(&self.path)?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        self.entries = serde_json::from_slice(&content)?;
        tracing::trace!(entries = self.entries.len(), "index loaded");

        Ok(())
    }

    /// Stage `oid` at `path`.
    ///
    /// A file replacing a directory drops every entry below it, and a file
    /// below a path tracked as a file drops that entry.
    pub fn add(&mut self, path: String, oid: ObjectId) {
        for parent in parent_dirs(&path) {
            self.entries.remove(parent);
        }
        self.remove_children(&path);

        self.entries.insert(path, oid);
        self.changed = true;
    }

    pub fn remove(&mut self, path: &str) {
        if self.entries.remove(path).is_some() {
            self.changed = true;
        }
        self.remove_children(path);
    }

    fn remove_children(&mut self, path: &str) {
        let before = self.entries.len();
        self.entries
            .retain(|entry_path, _| entry_path == path || !is_sub_path(entry_path, path));

        if self.entries.len() != before {
            self.changed = true;
        }
    }

    /// Replace every entry at once
    pub fn replace(&mut self, entries: FlatIndex) {
        self.entries = entries;
        self.changed = true;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Persist the entries, unless nothing changed since the last load or write
    pub fn write_updates(&mut self) -> LitResult<()> {
        if !self.changed && self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, serde_json::to_vec_pretty(&self.entries)?)?;
        self.changed = false;

        tracing::debug!(entries = self.entries.len(), "index written");
        Ok(())
    }

    pub fn entries(&self) -> &FlatIndex {
        &self.entries
    }

}
