use crate::common::command::{init_repository_dir, run_lit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["z.txt", "a/new.txt", "b.txt"] {
        write_file(FileSpec::new(
            init_repository_dir.path().join(name),
            String::new(),
        ));
    }
    std::fs::create_dir_all(init_repository_dir.path().join("empty"))?;

    let status = stdout_of(&mut run_lit_command(
        init_repository_dir.path(),
        &["status", "--porcelain"],
    ))?;

    assert_eq!(status, "?? a/new.txt\n?? b.txt\n?? z.txt\n");

    Ok(())
}
