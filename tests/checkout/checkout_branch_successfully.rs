use crate::common::command::{init_repository_dir, lit_commit, run_lit_command, stdout_of};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_lit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_lit_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to branch 'feature'"));

    write_file(FileSpec::new(dir.join("b.txt"), "bee".to_string()));
    write_file(FileSpec::new(dir.join("1.txt"), "changed on feature".to_string()));
    run_lit_command(dir, &["add", "."]).assert().success();
    lit_commit(dir, "Add b").assert().success();

    run_lit_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to branch 'main'"));

    assert!(!dir.join("b.txt").exists());
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a").join("b").join("3.txt")), "three");
    assert_eq!(
        stdout_of(&mut run_lit_command(dir, &["status", "--porcelain"]))?,
        ""
    );

    run_lit_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("b.txt")), "bee");
    assert_eq!(read_file(&dir.join("1.txt")), "changed on feature");

    run_lit_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Already on 'feature'"));

    Ok(())
}

#[rstest]
fn checkout_keeps_untracked_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_lit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("scratch.txt"), "notes".to_string()));

    run_lit_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("scratch.txt")), "notes");
    assert_eq!(
        stdout_of(&mut run_lit_command(dir, &["status", "--porcelain"]))?,
        "?? scratch.txt\n"
    );

    Ok(())
}
