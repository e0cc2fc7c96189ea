//! References (branches and HEAD)
//!
//! Branches are names pointing to commits, one file per branch under
//! `refs/heads`. HEAD either follows a branch or is detached on a commit.
//!
//! ## File Format
//!
//! - `HEAD`: `{"Detached": bool, "Location": "<branch name or commit id>"}`
//! - `refs/heads/<name>`: `{"Reference": "<commit id>"}`
//!
//! Hierarchical names (`feature/x`) map to nested directories.

use crate::areas::database::Database;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::{Head, HeadRecord};
use crate::artifacts::index::parent_dirs;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{LitError, LitResult};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.lit`)
    path: Box<Path>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BranchRecord {
    reference: ObjectId,
}

impl Refs {
    pub fn read_head(&self) -> LitResult<Head> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Err(LitError::NotFound(HEAD_REF_NAME.to_string()));
        }

        let record: HeadRecord = serde_json::from_slice(&std::fs::read(head_path)?)?;
        record.try_into()
    }

    /// Check that HEAD may point to `head`: an existing branch or a commit
    pub fn validate_head(&self, head: &Head, database: &Database) -> LitResult<()> {
        match head {
            Head::Attached(branch) if !self.branch_exists(branch) => Err(
                LitError::InvalidReference(format!("branch {branch} does not exist")),
            ),
            Head::Detached(oid) if !database.is_commit(oid) => Err(LitError::InvalidReference(
                format!("{oid} is not a commit"),
            )),
            _ => Ok(()),
        }
    }

    pub fn set_head(&self, head: &Head, database: &Database) -> LitResult<()> {
        self.validate_head(head, database)?;
        self.write_head(head)
    }

    /// Write HEAD without validation; only used to set up an unborn branch
    pub(crate) fn write_head(&self, head: &Head) -> LitResult<()> {
        std::fs::write(
            self.head_path(),
            serde_json::to_vec_pretty(&HeadRecord::from(head))?,
        )?;

        tracing::debug!(%head, "HEAD moved");
        Ok(())
    }

    /// Commit HEAD resolves to, `None` while the attached branch is unborn
    pub fn head_commit(&self) -> LitResult<Option<ObjectId>> {
        match self.read_head()? {
            Head::Attached(branch) if !self.branch_exists(&branch) => Ok(None),
            Head::Attached(branch) => self.read_branch(&branch).map(Some),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Advance HEAD to `oid`: the attached branch moves (and is born if
    /// needed), a detached HEAD is rewritten
    pub fn nudge_head(&self, oid: ObjectId) -> LitResult<()> {
        match self.read_head()? {
            Head::Attached(branch) => self.write_branch(&branch, &oid),
            Head::Detached(_) => self.write_head(&Head::Detached(oid)),
        }
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    pub fn read_branch(&self, name: &BranchName) -> LitResult<ObjectId> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Err(LitError::NotFound(format!("branch {name}")));
        }

        let record: BranchRecord = serde_json::from_slice(&std::fs::read(branch_path)?)?;
        Ok(record.reference)
    }

    fn write_branch(&self, name: &BranchName, oid: &ObjectId) -> LitResult<()> {
        let branch_path = self.branch_path(name);

        if let Some(parent) = branch_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(
            &branch_path,
            serde_json::to_vec_pretty(&BranchRecord {
                reference: oid.clone(),
            })?,
        )?;

        tracing::debug!(branch = %name, %oid, "branch updated");
        Ok(())
    }

    pub fn create_branch(
        &self,
        name: &BranchName,
        oid: &ObjectId,
        database: &Database,
    ) -> LitResult<()> {
        // a directory in the way means a hierarchical branch already uses the name
        if self.branch_exists(name) || self.branch_path(name).is_dir() {
            return Err(LitError::AlreadyExists(format!("branch {name}")));
        }

        // and a branch file in the way blocks every name below it
        if let Some(parent) = parent_dirs(name.as_ref())
            .into_iter()
            .find(|parent| self.heads_path().join(parent).is_file())
        {
            return Err(LitError::AlreadyExists(format!("branch {parent}")));
        }

        if !database.is_commit(oid) {
            return Err(LitError::InvalidReference(format!("{oid} is not a commit")));
        }

        self.write_branch(name, oid)
    }

    /// Remove a branch, returning the commit it pointed to
    pub fn delete_branch(&self, name: &BranchName) -> LitResult<ObjectId> {
        let oid = self.read_branch(name)?;
        let branch_path = self.branch_path(name);

        std::fs::remove_file(&branch_path)?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        tracing::debug!(branch = %name, %oid, "branch deleted");
        Ok(oid)
    }

    /// Like [`Refs::delete_branch`], but first detaches HEAD onto the
    /// branch's commit when HEAD follows the branch being deleted
    pub fn delete_branch_safe(&self, name: &BranchName) -> LitResult<ObjectId> {
        let oid = self.read_branch(name)?;

        if self.read_head()?.branch() == Some(name) {
            self.write_head(&Head::Detached(oid))?;
        }

        self.delete_branch(name)
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> LitResult<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();

        branches.sort();
        Ok(branches)
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> LitResult<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.heads_path().join(name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
