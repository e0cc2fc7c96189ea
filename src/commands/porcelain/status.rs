use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::status::file_change::{ChangeArea, ChangeKind, ChangeLabel};
use crate::artifacts::status::status_info::{ChangeSet, StatusInfo};
use crate::errors::LitResult;
use colored::Colorize;

impl Repository {
    pub fn status(&self, porcelain: bool) -> LitResult<()> {
        let status = self.status_info()?;

        if porcelain {
            self.print_porcelain_format(&status)
        } else {
            self.print_long_format(&status)
        }
    }

    /// Two-column `XY path` lines: X is the staged change, Y the unstaged one
    fn print_porcelain_format(&self, status: &StatusInfo) -> LitResult<()> {
        let paths = status.dirty_paths();

        for path in paths {
            let code = |changes: &ChangeSet| changes.get(&path).map_or(" ", ChangeKind::code);
            writeln!(
                self.writer(),
                "{}{} {}",
                code(&status.staged),
                code(&status.unstaged),
                path
            )?;
        }

        for path in &status.untracked {
            writeln!(self.writer(), "?? {}", path)?;
        }

        Ok(())
    }

    fn print_long_format(&self, status: &StatusInfo) -> LitResult<()> {
        match self.refs().read_head()? {
            Head::Attached(branch) => writeln!(self.writer(), "On branch {}", branch)?,
            Head::Detached(oid) => writeln!(
                self.writer(),
                "{}",
                format!("HEAD detached at {}", oid.to_short_oid()).red()
            )?,
        }
        if self.refs().head_commit()?.is_none() {
            writeln!(self.writer(), "\nNo commits yet")?;
        }

        self.print_changes(
            "Changes to be committed:",
            &status.staged,
            ChangeArea::Staged,
        )?;
        self.print_changes(
            "Changes not staged for commit:",
            &status.unstaged,
            ChangeArea::Unstaged,
        )?;

        if !status.untracked.is_empty() {
            writeln!(self.writer(), "\nUntracked files:")?;
            for path in &status.untracked {
                writeln!(self.writer(), "{:>8}{}", "", path.red())?;
            }
        }

        if status.is_clean() && status.untracked.is_empty() {
            writeln!(self.writer(), "\nnothing to commit, working tree clean")?;
        } else if status.staged.is_empty() {
            writeln!(self.writer(), "\nno changes added to commit")?;
        }

        Ok(())
    }

    fn print_changes(&self, title: &str, changes: &ChangeSet, area: ChangeArea) -> LitResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "\n{}", title)?;
        for (path, kind) in changes {
            let label = ChangeLabel { kind: *kind, area };
            writeln!(self.writer(), "{}{}", label, path)?;
        }

        Ok(())
    }
}
