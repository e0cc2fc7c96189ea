use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::index::{FlatIndex, parent_dirs};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::ChangeKind;
use crate::artifacts::tree::flatten_tree;
use crate::errors::{LitError, LitResult};

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around, make experimental
changes and commit them, and you can discard any commits you make in this
state without impacting any branches by performing another checkout.

If you want to create a new branch to retain commits you create, you may
do so (now or later) by using the branch command. Example:

    lit branch <new-branch-name>
"#;

/// Untracked paths that would have to be deleted for the target tree to be
/// written: a target file at one of their parent directories, or target files
/// below them.
fn untracked_in_the_way<'a>(
    untracked: impl IntoIterator<Item = &'a String>,
    target_files: &FlatIndex,
) -> Vec<String> {
    untracked
        .into_iter()
        .filter(|path| {
            let dir_prefix = format!("{path}/");
            let blocks_dir = target_files
                .range(dir_prefix.clone()..)
                .next()
                .is_some_and(|(target, _)| target.starts_with(&dir_prefix));

            blocks_dir
                || parent_dirs(path)
                    .iter()
                    .any(|dir| target_files.contains_key(*dir))
        })
        .cloned()
        .collect()
}

impl Repository {
    /// Turn a checkout target into the HEAD state it asks for.
    ///
    /// An existing branch name wins over a hash prefix. With `detach`, a branch
    /// resolves to its commit instead of attaching HEAD to it.
    pub fn resolve_target(&self, target: &str, detach: bool) -> LitResult<Head> {
        if let Ok(branch) = BranchName::try_parse(target)
            && self.refs().branch_exists(&branch)
        {
            return if detach {
                Ok(Head::Detached(self.refs().read_branch(&branch)?))
            } else {
                Ok(Head::Attached(branch))
            };
        }

        match self.database().expand_hash(target)? {
            Some(oid) => Ok(Head::Detached(oid)),
            None => Err(LitError::NotFound(format!("branch or commit {target}"))),
        }
    }

    /// Move HEAD to `target` and make the working tree and index match it.
    ///
    /// Refused with `UncommittedChanges` while anything is staged or modified,
    /// and with `UntrackedInTheWay` when an untracked file blocks a target
    /// directory or sits below a target file. Tracked files are replaced by
    /// the target commit's files, other untracked files are left in place.
    pub fn switch(&self, target: &str, detach: bool) -> LitResult<Head> {
        self.ensure_initialized()?;

        let head = self.resolve_target(target, detach)?;

        let status = self.status_info()?;
        if !status.is_clean() {
            return Err(LitError::UncommittedChanges {
                paths: status.dirty_paths(),
            });
        }

        // nothing destructive may happen before this point
        self.refs().validate_head(&head, self.database())?;

        let target_oid = self.head_target_commit(&head)?;
        let commit = self.database().read_commit(&target_oid)?;
        let target_files = flatten_tree(self.database(), commit.tree_oid())?;

        let in_the_way = untracked_in_the_way(&status.untracked, &target_files);
        if !in_the_way.is_empty() {
            return Err(LitError::UntrackedInTheWay { paths: in_the_way });
        }

        let mut index = self.index();
        let previous_entries = index.entries().clone();

        tracing::debug!(files = previous_entries.len(), "clearing tracked files");
        for path in previous_entries.keys() {
            self.workspace().remove_file(path)?;
        }

        self.refs().set_head(&head, self.database())?;

        tracing::debug!(files = target_files.len(), oid = %target_oid, "materializing commit");
        for (path, blob_oid) in &target_files {
            let blob = self.database().read_blob(blob_oid)?;
            if self.workspace().write_file(path, blob.content())? {
                tracing::warn!(path = %path, "untracked file overwritten by checkout");
            }
        }

        // commit-tree entries win, other staged additions are carried forward
        let mut entries = status
            .staged
            .iter()
            .filter(|(_, kind)| matches!(kind, ChangeKind::Created | ChangeKind::Modified))
            .filter_map(|(path, _)| Some((path.clone(), previous_entries.get(path)?.clone())))
            .collect::<FlatIndex>();
        entries.extend(target_files);

        index.replace(entries);
        index.write_updates()?;

        tracing::info!(%head, "checkout complete");
        Ok(head)
    }

    fn head_target_commit(&self, head: &Head) -> LitResult<ObjectId> {
        match head {
            Head::Attached(branch) => self.refs().read_branch(branch),
            Head::Detached(oid) => Ok(oid.clone()),
        }
    }

    pub fn checkout(&self, target: &str, detach: bool) -> LitResult<()> {
        self.ensure_initialized()?;

        let previous_head = self.refs().read_head()?;
        let previous_oid = self.refs().head_commit()?;

        let new_head = self.switch(target, detach)?;
        let new_oid = self.head_target_commit(&new_head)?;

        if previous_head.is_detached()
            && let Some(previous_oid) = previous_oid
            && previous_oid != new_oid
        {
            self.print_head_position("Previous HEAD position was", &previous_oid)?;
        }

        match &new_head {
            Head::Detached(oid) => {
                if !previous_head.is_detached() {
                    eprintln!("Note: checking out '{}'.\n{}", target, DETACHMENT_NOTICE);
                }
                self.print_head_position("HEAD is now at", oid)?;
            }
            Head::Attached(branch) if new_head == previous_head => {
                eprintln!("Already on '{}'", branch);
            }
            Head::Attached(branch) => {
                eprintln!("Switched to branch '{}'", branch);
            }
        }

        Ok(())
    }

    fn print_head_position(&self, message: &str, oid: &ObjectId) -> LitResult<()> {
        let commit = self.database().read_commit(oid)?;

        eprintln!("{} {} {}", message, oid.to_short_oid(), commit.short_message());
        Ok(())
    }
}
