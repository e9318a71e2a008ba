use crate::areas::project::Project;
use crate::artifacts::pipeline::pipeline_name::PipelineName;
use derive_new::new;
use std::path::PathBuf;

/// The on-disk locations a pipeline occupies inside a project: its code
/// directory, its tests directory and the configuration directory of the
/// environment it was scaffolded into.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PipelineArtifacts {
    pub pipeline_dir: PathBuf,
    pub pipeline_tests: PathBuf,
    pub pipeline_conf: PathBuf,
}

impl PipelineArtifacts {
    pub fn locate(project: &Project, name: &PipelineName, env: &str) -> Self {
        let module_path = name.as_path();

        Self::new(
            project.pipelines_dir().join(&module_path),
            project.tests_dir().join("pipelines").join(&module_path),
            project.conf_path().join(env),
        )
    }
}
