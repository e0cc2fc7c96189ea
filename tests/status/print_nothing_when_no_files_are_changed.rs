use crate::common::command::{init_repository_dir, run_lit_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_when_no_files_are_changed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = stdout_of(&mut run_lit_command(
        init_repository_dir.path(),
        &["status", "--porcelain"],
    ))?;

    assert_eq!(status, "");

    Ok(())
}
