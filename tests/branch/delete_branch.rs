use crate::common::command::{get_head_commit_id, init_repository_dir, run_lit_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn delete_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head_oid = get_head_commit_id(dir)?.ok_or("HEAD is unborn")?;
    run_lit_command(dir, &["branch", "feature/login"])
        .assert()
        .success();

    assert_eq!(
        stdout_of(&mut run_lit_command(dir, &["branch", "-d", "feature/login"]))?,
        format!("Deleted branch feature/login (was {}).\n", &head_oid[..7])
    );

    let heads = dir.join(".lit").join("refs").join("heads");
    assert!(!heads.join("feature").exists());
    assert!(heads.join("main").exists());

    run_lit_command(dir, &["branch", "-d", "feature/login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[rstest]
fn delete_current_branch_detaches_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head_oid = get_head_commit_id(dir)?.ok_or("HEAD is unborn")?;

    run_lit_command(dir, &["branch", "-d", "main"])
        .assert()
        .success();

    let head: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join(".lit").join("HEAD"))?)?;
    assert_eq!(
        head,
        serde_json::json!({ "Detached": true, "Location": head_oid.clone() })
    );
    assert_eq!(get_head_commit_id(dir)?, Some(head_oid.clone()));
    assert!(!dir.join(".lit").join("refs").join("heads").join("main").exists());

    assert_eq!(
        stdout_of(&mut run_lit_command(dir, &["branch"]))?,
        format!("* (HEAD detached at {})\n", &head_oid[..7])
    );

    Ok(())
}
