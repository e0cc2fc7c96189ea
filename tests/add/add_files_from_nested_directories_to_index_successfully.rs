use crate::common::command::{read_object, repository_dir, run_lit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
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
    write_file(FileSpec::new(
        repository_dir.path().join("c").join("4.txt"),
        "four".to_string(),
    ));

    run_lit_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success();

    let index: serde_json::Map<String, serde_json::Value> = serde_json::from_str(
        &std::fs::read_to_string(repository_dir.path().join(".lit").join("index"))?,
    )?;
    assert_eq!(index.keys().collect::<Vec<_>>(), vec!["a/b/3.txt"]);

    run_lit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    let index: serde_json::Map<String, serde_json::Value> = serde_json::from_str(
        &std::fs::read_to_string(repository_dir.path().join(".lit").join("index"))?,
    )?;
    assert_eq!(
        index.keys().collect::<Vec<_>>(),
        vec!["1.txt", "a/b/3.txt", "c/4.txt"]
    );

    let blob_oid = index["1.txt"].as_str().ok_or("index entry is not a string")?;
    let blob = read_object(repository_dir.path(), blob_oid)?;
    assert_eq!(
        blob,
        serde_json::json!({ "Type": "Blob", "Object": { "Content": hex::encode("one") } })
    );

    Ok(())
}
