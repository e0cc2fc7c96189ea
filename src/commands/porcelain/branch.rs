use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::errors::{LitError, LitResult};
use colored::Colorize;

impl Repository {
    /// Every branch, sorted, flagged when HEAD is attached to it
    pub fn branches(&self) -> LitResult<Vec<(BranchName, bool)>> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        Ok(self
            .refs()
            .list_branches()?
            .into_iter()
            .map(|branch| {
                let is_current = head.branch() == Some(&branch);
                (branch, is_current)
            })
            .collect())
    }

    pub fn branch(&self, name: Option<&str>, delete: bool) -> LitResult<()> {
        match (name, delete) {
            (None, _) => self.list_branches(),
            (Some(name), false) => self.create_branch(name),
            (Some(name), true) => self.delete_branch(name),
        }
    }

    fn list_branches(&self) -> LitResult<()> {
        let branches = self.branches()?;

        if let Head::Detached(oid) = self.refs().read_head()? {
            writeln!(
                self.writer(),
                "* {}",
                format!("(HEAD detached at {})", oid.to_short_oid()).green()
            )?;
        }

        for (branch, is_current) in branches {
            if is_current {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }

    /// New branch at the HEAD commit
    fn create_branch(&self, name: &str) -> LitResult<()> {
        self.ensure_initialized()?;

        let branch = BranchName::try_parse(name)?;
        let head_oid = self.refs().head_commit()?.ok_or(LitError::NoCommitYet)?;

        self.refs()
            .create_branch(&branch, &head_oid, self.database())?;

        tracing::info!(branch = %branch, oid = %head_oid, "branch created");
        Ok(())
    }

    fn delete_branch(&self, name: &str) -> LitResult<()> {
        self.ensure_initialized()?;

        let branch = BranchName::try_parse(name)?;
        let oid = self.refs().delete_branch_safe(&branch)?;

        writeln!(
            self.writer(),
            "Deleted branch {} (was {}).",
            branch,
            oid.to_short_oid()
        )?;

        Ok(())
    }
}
