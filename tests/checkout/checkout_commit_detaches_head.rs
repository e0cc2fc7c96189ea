use crate::common::command::{
    get_head_commit_id, init_repository_dir, lit_commit, run_lit_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_commit_detaches_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first_oid = get_head_commit_id(dir)?.ok_or("HEAD is unborn")?;

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_lit_command(dir, &["add", "1.txt"]).assert().success();
    lit_commit(dir, "Second commit").assert().success();
    let second_oid = get_head_commit_id(dir)?.ok_or("HEAD is unborn")?;

    run_lit_command(dir, &["checkout", &first_oid[..10]])
        .assert()
        .success()
        .stderr(predicate::str::contains("You are in 'detached HEAD' state"))
        .stderr(predicate::str::contains(format!(
            "HEAD is now at {} Initial commit",
            &first_oid[..7]
        )));

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(get_head_commit_id(dir)?, Some(first_oid.clone()));
    assert_eq!(
        stdout_of(&mut run_lit_command(dir, &["branch"]))?,
        format!("* (HEAD detached at {})\n  main\n", &first_oid[..7])
    );

    run_lit_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Previous HEAD position was {} Initial commit",
            &first_oid[..7]
        )))
        .stderr(predicate::str::contains("Switched to branch 'main'"));

    assert_eq!(get_head_commit_id(dir)?, Some(second_oid));
    assert_eq!(read_file(&dir.join("1.txt")), "uno");

    Ok(())
}

#[rstest]
fn checkout_detach_on_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head_oid = get_head_commit_id(dir)?.ok_or("HEAD is unborn")?;

    run_lit_command(dir, &["checkout", "--detach", "main"])
        .assert()
        .success();

    let head: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join(".lit").join("HEAD"))?)?;
    assert_eq!(
        head,
        serde_json::json!({ "Detached": true, "Location": head_oid })
    );

    Ok(())
}

#[rstest]
#[case::unknown_name("nowhere")]
#[case::unknown_hash("0000000")]
fn checkout_unknown_target_fails(init_repository_dir: TempDir, #[case] target: &str) {
    run_lit_command(init_repository_dir.path(), &["checkout", target])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "branch or commit {target} not found"
        )));
}
