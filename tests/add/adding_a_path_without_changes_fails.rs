use crate::common::command::{init_repository_dir, run_lit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::missing_file("missing.txt")]
#[case::unchanged_file("1.txt")]
#[case::unchanged_directory("a")]
fn adding_a_path_without_changes_fails(init_repository_dir: TempDir, #[case] path: &str) {
    run_lit_command(init_repository_dir.path(), &["add", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("nothing to stage at {path}")));
}
