use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::tree::build_tree;
use crate::errors::LitResult;
use chrono::{DateTime, Utc};

/// Pins the timestamp of new commits (RFC 3339 or `%Y-%m-%d %H:%M:%S %z`)
pub const COMMIT_DATE_ENV: &str = "LIT_COMMIT_DATE";

fn commit_timestamp() -> DateTime<Utc> {
    std::env::var(COMMIT_DATE_ENV)
        .ok()
        .and_then(|date_str| {
            DateTime::parse_from_rfc3339(&date_str)
                .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        })
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

impl Repository {
    /// Snapshot the index as a new commit on top of HEAD and advance HEAD to it.
    ///
    /// The name is stored exactly as given.
    pub fn create_commit(&self, name: &str) -> LitResult<ObjectId> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        let tree_oid = build_tree(self.database(), index.entries())?;
        let parents = self.refs().head_commit()?.into_iter().collect::<Vec<_>>();

        let commit = Commit::new(name.to_string(), tree_oid, parents, commit_timestamp());
        let commit_oid = self.database().write_commit(&commit)?;
        self.refs().nudge_head(commit_oid.clone())?;

        tracing::info!(oid = %commit_oid, "commit created");
        Ok(commit_oid)
    }

    pub fn commit(&self, message: &str) -> LitResult<()> {
        self.ensure_initialized()?;

        let is_root = self.refs().head_commit()?.is_none();
        let commit_oid = self.create_commit(message)?;
        let commit = self.database().read_commit(&commit_oid)?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            if is_root { "(root-commit) " } else { "" },
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
