use crate::common::command::{init_repository_dir, run_lit_command, stdout_of};
use crate::common::file::delete_path;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_deleted_files_from_last_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    delete_path(&init_repository_dir.path().join("a"));

    let status = stdout_of(&mut run_lit_command(
        init_repository_dir.path(),
        &["status", "--porcelain"],
    ))?;

    assert_eq!(status, " D a/2.txt\n D a/b/3.txt\n");

    Ok(())
}
