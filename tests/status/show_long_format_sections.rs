use crate::common::command::{init_repository_dir, repository_dir, run_lit_command, stdout_of};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_no_commits_yet_on_unborn_branch(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let status = stdout_of(&mut run_lit_command(repository_dir.path(), &["status"]))?;

    assert_eq!(
        status,
        "On branch main\n\nNo commits yet\n\nnothing to commit, working tree clean\n"
    );

    Ok(())
}

#[rstest]
fn show_long_format_sections(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("new.txt"), "new".to_string()));
    run_lit_command(dir, &["add", "new.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    delete_path(&dir.join("a").join("2.txt"));
    write_file(FileSpec::new(dir.join("notes.md"), String::new()));

    let status = stdout_of(&mut run_lit_command(dir, &["status"]))?;

    assert_eq!(
        status,
        "On branch main\n\
         \n\
         Changes to be committed:\n        new file:   new.txt\n\
         \n\
         Changes not staged for commit:\n        modified:   1.txt\n        deleted:    a/2.txt\n\
         \n\
         Untracked files:\n        notes.md\n"
    );

    Ok(())
}
