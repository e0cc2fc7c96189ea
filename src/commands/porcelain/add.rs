use crate::areas::repository::Repository;
use crate::artifacts::index::{clean_path, is_sub_path};
use crate::artifacts::status::file_change::ChangeKind;
use crate::errors::{LitError, LitResult};

impl Repository {
    /// Stage every modified, deleted or untracked file at or below `path`.
    ///
    /// Existing files are written as blobs and recorded in the index, deleted
    /// ones are dropped from it. Returns the touched paths in order; when
    /// nothing matches the index is left alone and `NothingToStage` is returned.
    pub fn stage(&self, path: &str) -> LitResult<Vec<String>> {
        let pathspec = clean_path(path)?;
        let status = self.status_info()?;

        let mut candidates = status
            .unstaged
            .iter()
            .filter(|(changed_path, _)| is_sub_path(changed_path, &pathspec))
            .map(|(changed_path, kind)| (changed_path.clone(), Some(*kind)))
            .chain(
                status
                    .untracked
                    .iter()
                    .filter(|untracked_path| is_sub_path(untracked_path, &pathspec))
                    .map(|untracked_path| (untracked_path.clone(), None)),
            )
            .collect::<Vec<_>>();
        candidates.sort();

        if candidates.is_empty() {
            return Err(LitError::NothingToStage(path.to_string()));
        }

        let mut index = self.index();
        let mut staged = Vec::with_capacity(candidates.len());

        for (changed_path, kind) in candidates {
            match kind {
                None | Some(ChangeKind::Modified) => {
                    let content = self.workspace().read_file(&changed_path)?;
                    let oid = self.database().write_blob(content)?;
                    index.add(changed_path.clone(), oid);
                }
                Some(ChangeKind::Deleted) => index.remove(&changed_path),
                Some(kind) => unreachable!("unstaged drift is never {kind:?}"),
            }
            staged.push(changed_path);
        }

        index.write_updates()?;
        tracing::info!(paths = staged.len(), pathspec = %pathspec, "paths staged");

        Ok(staged)
    }

    pub fn add(&self, path: &str) -> LitResult<()> {
        self.stage(path)?;
        Ok(())
    }
}
