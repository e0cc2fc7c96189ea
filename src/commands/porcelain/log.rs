use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LitResult;
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Every commit reachable from HEAD, each once, newest first.
    ///
    /// Commits with the same timestamp are ordered by ID. Empty while HEAD
    /// is unborn.
    pub fn history(&self) -> LitResult<Vec<(ObjectId, Commit)>> {
        self.ensure_initialized()?;

        let mut seen = BTreeSet::new();
        let mut pending = self.refs().head_commit()?.into_iter().collect::<Vec<_>>();
        let mut commits = Vec::new();

        while let Some(oid) = pending.pop() {
            if !seen.insert(oid.clone()) {
                continue;
            }

            let commit = self.database().read_commit(&oid)?;
            pending.extend(commit.parents().iter().cloned());
            commits.push((oid, commit));
        }

        commits.sort_by(|(left_oid, left), (right_oid, right)| {
            right
                .timestamp()
                .cmp(&left.timestamp())
                .then_with(|| left_oid.cmp(right_oid))
        });

        Ok(commits)
    }

    pub fn log(&self, opts: &LogOptions) -> LitResult<()> {
        let history = self.history()?;
        let decorations = self.decorations()?;

        for (oid, commit) in history {
            let decoration = decorations
                .get(&oid)
                .map(|names| format!(" ({})", names.join(", ")))
                .unwrap_or_default();

            if opts.oneline {
                writeln!(
                    self.writer(),
                    "{}{} {}",
                    oid.to_short_oid().yellow(),
                    decoration,
                    commit.short_message()
                )?;
            } else {
                self.show_commit_medium(&oid, &commit, &decoration)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(
        &self,
        oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> LitResult<()> {
        writeln!(self.writer(), "{}{}", format!("commit {oid}").yellow(), decoration)?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.timestamp().format("%a %b %-d %H:%M:%S %Y %z")
        )?;
        writeln!(self.writer())?;
        for message_line in commit.name().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    /// Ref names per commit, HEAD first
    fn decorations(&self) -> LitResult<BTreeMap<ObjectId, Vec<String>>> {
        let mut decorations = BTreeMap::<ObjectId, Vec<String>>::new();
        let head = self.refs().read_head()?;

        if let Head::Detached(oid) = &head {
            decorations
                .entry(oid.clone())
                .or_default()
                .push("HEAD".bold().cyan().to_string());
        }

        for branch in self.refs().list_branches()? {
            let oid = self.refs().read_branch(&branch)?;
            let name = if head.branch() == Some(&branch) {
                format!("{} -> {}", "HEAD".bold().cyan(), branch.as_ref().bold().green())
            } else {
                branch.as_ref().bold().green().to_string()
            };

            let names = decorations.entry(oid).or_default();
            if head.branch() == Some(&branch) {
                names.insert(0, name);
            } else {
                names.push(name);
            }
        }

        Ok(decorations)
    }
}
