use crate::common::command::{
    get_head_commit_id, lit_commit, read_object, repository_dir, run_lit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_commit_object_successfully_for_nested_project(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));
    run_lit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    lit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[\(root-commit\) [0-9a-f]{7}\] Initial commit\n$",
        )?);

    let commit_oid = get_head_commit_id(repository_dir.path())?.ok_or("HEAD is unborn")?;
    let commit = read_object(repository_dir.path(), &commit_oid)?;
    assert_eq!(commit["Type"], "Commit");
    assert_eq!(commit["Object"]["Name"], "Initial commit");
    assert_eq!(commit["Object"]["Parents"], serde_json::json!([]));
    assert_eq!(commit["Object"]["Time"], "2023-01-01T12:00:00Z");

    let root_tree_oid = commit["Object"]["Tree"].as_str().ok_or("missing tree")?;
    let root_tree = read_object(repository_dir.path(), root_tree_oid)?;
    assert_eq!(root_tree["Type"], "Tree");
    let entries = root_tree["Object"]["Entries"]
        .as_object()
        .ok_or("missing entries")?;
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["1.txt", "a"]);
    assert_eq!(entries["1.txt"]["Type"], "Blob");
    assert_eq!(entries["a"]["Type"], "Tree");

    let a_tree_oid = entries["a"]["Hash"].as_str().ok_or("missing hash")?;
    let a_tree = read_object(repository_dir.path(), a_tree_oid)?;
    assert_eq!(a_tree["Object"]["Entries"]["b"]["Type"], "Tree");

    Ok(())
}
