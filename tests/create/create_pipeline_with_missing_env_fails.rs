use crate::common::command::{project_dir, run_pipeworks_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn create_pipeline_with_missing_env_fails(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_pipeworks_command(
        project_dir.path(),
        &["pipeline", "create", "ingest", "--env", "staging"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "unable to locate environment 'staging'",
    ));

    // the environment check aborts before anything is created
    assert!(
        !project_dir
            .path()
            .join("src")
            .join("demo_project")
            .join("pipelines")
            .exists()
    );

    Ok(())
}

#[rstest]
fn create_pipeline_in_an_existing_custom_env(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    project_dir.child("conf").child("staging").create_dir_all()?;

    run_pipeworks_command(
        project_dir.path(),
        &["pipeline", "create", "ingest", "--env", "staging"],
    )
    .assert()
    .success();

    assert!(
        project_dir
            .path()
            .join("conf")
            .join("staging")
            .join("parameters_ingest.yml")
            .is_file()
    );
    assert!(
        !project_dir
            .path()
            .join("conf")
            .join("base")
            .join("parameters_ingest.yml")
            .exists()
    );

    Ok(())
}
