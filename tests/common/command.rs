use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::fixture;
use std::path::Path;

pub const PACKAGE_NAME: &str = "demo_project";

/// A fresh pipeworks project: manifest, empty package directory and a 'base'
/// configuration environment.
#[fixture]
pub fn project_dir() -> TempDir {
    redirect_temp_dir();
    let dir = TempDir::new().expect("Failed to create temp dir");

    dir.child("pipeworks.toml")
        .write_str(&format!("[project]\nname = \"{}\"\n", PACKAGE_NAME))
        .expect("Failed to write project manifest");
    dir.child("src")
        .child(PACKAGE_NAME)
        .create_dir_all()
        .expect("Failed to create package directory");
    dir.child("conf")
        .child("base")
        .create_dir_all()
        .expect("Failed to create base environment");

    dir
}

pub fn run_pipeworks_command(project_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("pipeworks").expect("Failed to find pipeworks binary");
    cmd.current_dir(project_dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn create_pipeline(project_dir: &Path, name: &str) {
    run_pipeworks_command(project_dir, &["pipeline", "create", name])
        .assert()
        .success();
}

pub fn pipeline_dir(project_dir: &Path, relative_path: &[&str]) -> std::path::PathBuf {
    let mut path = project_dir.join("src").join(PACKAGE_NAME).join("pipelines");
    for part in relative_path {
        path = path.join(part);
    }
    path
}

pub fn tests_dir(project_dir: &Path, relative_path: &[&str]) -> std::path::PathBuf {
    let mut path = project_dir.join("src").join("tests").join("pipelines");
    for part in relative_path {
        path = path.join(part);
    }
    path
}

pub fn conf_dir(project_dir: &Path, env: &str) -> std::path::PathBuf {
    project_dir.join("conf").join(env)
}
