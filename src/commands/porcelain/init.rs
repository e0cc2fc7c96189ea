use crate::areas::repository::{METADATA_DIR, Repository};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::errors::{LitError, LitResult};
use std::fs;

impl Repository {
    /// Create the metadata layout: object store, branch directory, an empty
    /// index and HEAD attached to the (unborn) default branch
    pub fn init(&self) -> LitResult<()> {
        if self.metadata_path().exists() {
            return Err(LitError::AlreadyExists(format!(
                "{} in {}",
                METADATA_DIR,
                self.path().display()
            )));
        }

        fs::create_dir_all(self.database().objects_path())?;
        fs::create_dir_all(self.refs().heads_path())?;

        self.refs()
            .write_head(&Head::Attached(BranchName::default_branch()))?;
        self.index().write_updates()?;

        tracing::info!(path = %self.path().display(), "repository initialized");
        writeln!(
            self.writer(),
            "Initialized empty lit repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
