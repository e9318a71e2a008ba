use crate::common::command::{project_dir, run_pipeworks_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn delete_nonexistent_pipeline_fails(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "ghost", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pipeline 'ghost' not found"));

    Ok(())
}

#[rstest]
fn delete_with_missing_env_fails(project_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_pipeworks_command(
        project_dir.path(),
        &["pipeline", "delete", "ghost", "-y", "--env", "staging"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "unable to locate environment 'staging'",
    ));

    Ok(())
}
