use crate::common::command::{create_pipeline, pipeline_dir, project_dir, run_pipeworks_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn declining_the_prompt_aborts_the_deletion(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_pipeline(project_dir.path(), "ingest");

    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "ingest"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("The following paths will be removed:"))
        .stdout(predicate::str::contains("Are you sure you want to delete pipeline 'ingest'?"))
        .stderr(predicate::str::contains("deletion aborted"));

    // nothing was touched
    assert!(pipeline_dir(project_dir.path(), &["ingest"]).is_dir());

    Ok(())
}

#[rstest]
fn accepting_the_prompt_deletes_the_pipeline(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_pipeline(project_dir.path(), "ingest");

    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "ingest"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Pipeline 'ingest' was successfully deleted.",
        ));

    assert!(!pipeline_dir(project_dir.path(), &["ingest"]).exists());

    Ok(())
}

#[rstest]
fn an_empty_answer_defaults_to_no(
    project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    create_pipeline(project_dir.path(), "ingest");

    run_pipeworks_command(project_dir.path(), &["pipeline", "delete", "ingest"])
        .write_stdin("\n")
        .assert()
        .failure();

    assert!(pipeline_dir(project_dir.path(), &["ingest"]).is_dir());

    Ok(())
}
