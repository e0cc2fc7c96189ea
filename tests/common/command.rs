use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with `1.txt`, `a/2.txt` and `a/b/3.txt` committed on `main`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_lit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    lit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_lit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("lit").expect("Failed to find lit binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("LIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn lit_commit(dir: &Path, message: &str) -> Command {
    lit_commit_at(dir, message, COMMIT_DATE)
}

/// Commit with a pinned timestamp (`%Y-%m-%d %H:%M:%S %z`)
pub fn lit_commit_at(dir: &Path, message: &str, date: &str) -> Command {
    let mut cmd = run_lit_command(dir, &["commit", "-m", message]);
    cmd.env("LIT_COMMIT_DATE", date);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// The commit HEAD resolves to, read straight from the JSON ref files
pub fn get_head_commit_id(dir: &Path) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let metadata = dir.join(".lit");
    let head: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(metadata.join("HEAD"))?)?;
    let location = head["Location"].as_str().ok_or("HEAD without location")?;

    if head["Detached"].as_bool() == Some(true) {
        return Ok(Some(location.to_string()));
    }

    let branch_path = metadata.join("refs").join("heads").join(location);
    if !branch_path.exists() {
        return Ok(None);
    }
    let branch: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(branch_path)?)?;
    Ok(branch["Reference"].as_str().map(str::to_string))
}

pub fn read_object(dir: &Path, oid: &str) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let path = dir.join(".lit").join("objects").join(&oid[..2]).join(&oid[2..]);
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}
