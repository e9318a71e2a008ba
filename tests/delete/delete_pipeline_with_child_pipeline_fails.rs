use crate::common::command::{create_pipeline, pipeline_dir, project_dir, run_pipeworks_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn delete_pipeline_with_child_pipeline_fails(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_pipeline(project_dir.path(), "etl");
    create_pipeline(project_dir.path(), "etl.extract");

    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "etl", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains a child pipeline"))
        .stderr(predicate::str::contains("extract"));

    // the consistency check aborts before any mutation
    assert!(pipeline_dir(project_dir.path(), &["etl"]).join("pipeline.toml").is_file());
    assert!(
        pipeline_dir(project_dir.path(), &["etl", "extract"])
            .join("pipeline.toml")
            .is_file()
    );

    Ok(())
}

#[rstest]
fn deleting_the_child_first_unblocks_the_parent(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_pipeline(project_dir.path(), "etl");
    create_pipeline(project_dir.path(), "etl.extract");

    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "etl.extract", "-y"])
        .assert()
        .success();
    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "etl", "-y"])
        .assert()
        .success();

    assert!(!pipeline_dir(project_dir.path(), &["etl"]).exists());

    Ok(())
}
