use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::FlatIndex;
use crate::artifacts::status::file_change::ChangeKind;
use crate::artifacts::tree::flatten_tree;
use crate::errors::LitResult;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type ChangeSet = BTreeMap<String, ChangeKind>;
pub type FileSet = BTreeSet<String>;

/// Drift between the working tree, the index and the HEAD commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    /// Working tree vs. index: `Modified` or `Deleted`
    pub unstaged: ChangeSet,
    /// Index vs. HEAD tree: `Created`, `Modified` or `Deleted`
    pub staged: ChangeSet,
    /// Files present in the working tree but not in the index
    pub untracked: FileSet,
}

impl StatusInfo {
    /// No staged or unstaged drift; untracked files do not count
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }

    /// Paths with staged or unstaged drift, sorted and deduplicated
    pub fn dirty_paths(&self) -> Vec<String> {
        self.staged
            .keys()
            .chain(self.unstaged.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> LitResult<StatusInfo> {
        let (unstaged, untracked) = self.scan_workspace(index.entries())?;
        let head_tree = self.load_head_tree()?;
        let staged = Self::compare_index_with_head(index.entries(), head_tree.as_ref());

        tracing::debug!(
            staged = staged.len(),
            unstaged = unstaged.len(),
            untracked = untracked.len(),
            "status computed"
        );

        Ok(StatusInfo {
            unstaged,
            staged,
            untracked,
        })
    }

    /// Hash every working tree file and compare it with its index entry
    fn scan_workspace(&self, entries: &FlatIndex) -> LitResult<(ChangeSet, FileSet)> {
        let mut unstaged = ChangeSet::new();
        let mut untracked = FileSet::new();
        let mut visited = BTreeSet::new();

        for path in self.repository.workspace().list_files()? {
            match entries.get(&path) {
                None => {
                    untracked.insert(path);
                }
                Some(staged_oid) => {
                    let content = self.repository.workspace().read_file(&path)?;
                    if &self.repository.database().hash(&content) != staged_oid {
                        unstaged.insert(path.clone(), ChangeKind::Modified);
                    }
                    visited.insert(path);
                }
            }
        }

        for path in entries.keys().filter(|path| !visited.contains(*path)) {
            unstaged.insert(path.clone(), ChangeKind::Deleted);
        }

        Ok((unstaged, untracked))
    }

    fn load_head_tree(&self) -> LitResult<Option<FlatIndex>> {
        match self.repository.refs().head_commit()? {
            Some(head_oid) => {
                let commit = self.repository.database().read_commit(&head_oid)?;
                Ok(Some(flatten_tree(
                    self.repository.database(),
                    commit.tree_oid(),
                )?))
            }
            None => Ok(None),
        }
    }

    /// Without a HEAD commit every index entry counts as created
    fn compare_index_with_head(entries: &FlatIndex, head_tree: Option<&FlatIndex>) -> ChangeSet {
        let Some(head_tree) = head_tree else {
            return entries
                .keys()
                .map(|path| (path.clone(), ChangeKind::Created))
                .collect();
        };

        let mut staged = ChangeSet::new();

        for (path, oid) in entries {
            match head_tree.get(path) {
                None => {
                    staged.insert(path.clone(), ChangeKind::Created);
                }
                Some(head_oid) if head_oid != oid => {
                    staged.insert(path.clone(), ChangeKind::Modified);
                }
                Some(_) => {}
            }
        }

        for path in head_tree.keys().filter(|path| !entries.contains_key(*path)) {
            staged.insert(path.clone(), ChangeKind::Deleted);
        }

        staged
    }
}
