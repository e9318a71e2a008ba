use crate::areas::project::{DEFAULT_ENV, Project};
use crate::artifacts::pipeline::PIPELINE_MARKER;
use crate::artifacts::pipeline::pipeline_name::{PipelineName, dotted_to_path};
use crate::artifacts::scratch::ScratchTree;
use crate::artifacts::sync::sync_dirs;
use crate::artifacts::template::{self, TemplateContext, TemplateSource};
use colored::Colorize;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub skip_config: bool,
    pub template_path: Option<PathBuf>,
    pub env: Option<String>,
}

impl Project {
    pub fn create_pipeline(&self, name: &str, opts: &CreateOptions) -> anyhow::Result<()> {
        let name = PipelineName::try_parse(name.to_string())?;

        let env = opts.env.as_deref().unwrap_or(DEFAULT_ENV);
        if !opts.skip_config {
            self.require_env(env)?;
        }

        let template =
            TemplateSource::resolve(opts.template_path.clone(), self.local_template_dir())?;
        writeln!(
            self.writer(),
            "Using pipeline template at: '{}'",
            template.describe()
        )?;

        let (parent, leaf) = name.split_on_last_dot();

        // the leaf name must be globally unique across the package
        if let Some(existing) = self.find_pipeline_marker(leaf)? {
            anyhow::bail!("pipeline '{}' already exists: ({})", leaf, existing.display());
        }

        let pipeline_dir = self.pipelines_dir().join(dotted_to_path(parent));
        let tests_target = self
            .tests_dir()
            .join("pipelines")
            .join(dotted_to_path(parent))
            .join(leaf);

        let result_path = self.instantiate_pipeline(leaf, &template, &pipeline_dir)?;
        self.copy_pipeline_tests(&result_path, &tests_target)?;
        self.copy_pipeline_configs(&result_path, &self.conf_path().join(env), opts.skip_config)?;

        writeln!(
            self.writer(),
            "\n{}\n",
            format!("Pipeline '{}' was successfully created.", leaf).green()
        )?;

        Ok(())
    }

    fn instantiate_pipeline(
        &self,
        leaf: &str,
        template: &TemplateSource,
        output_dir: &Path,
    ) -> anyhow::Result<PathBuf> {
        write!(self.writer(), "Creating the pipeline '{}': ", leaf)?;

        let ctx = TemplateContext::new(leaf.to_string());
        match template::instantiate(template, output_dir, &ctx) {
            Ok(result_path) => {
                writeln!(self.writer(), "{}", "OK".green())?;
                writeln!(
                    self.writer(),
                    "{}",
                    format!("  Location: '{}'", result_path.display()).bold()
                )?;

                Ok(result_path)
            }
            Err(err) => {
                writeln!(self.writer(), "{}", "FAILED".red())?;
                Err(err)
            }
        }
    }

    /// Looks for an existing `<leaf>/pipeline.toml` anywhere under the
    /// package directory.
    fn find_pipeline_marker(&self, leaf: &str) -> anyhow::Result<Option<PathBuf>> {
        for entry in WalkDir::new(self.package_dir())
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            let is_marker = entry.file_type().is_file()
                && entry.file_name() == OsStr::new(PIPELINE_MARKER);
            let parent_is_leaf = entry
                .path()
                .parent()
                .and_then(|parent| parent.file_name())
                .is_some_and(|parent_name| parent_name == OsStr::new(leaf));

            if is_marker && parent_is_leaf {
                return Ok(Some(entry.path().to_path_buf()));
            }
        }

        Ok(None)
    }

    fn copy_pipeline_tests(&self, result_path: &Path, tests_target: &Path) -> anyhow::Result<()> {
        let scratch = ScratchTree::new(result_path.join("tests"));

        sync_dirs(self.writer().as_mut(), scratch.path(), tests_target, "", false)
    }

    fn copy_pipeline_configs(
        &self,
        result_path: &Path,
        conf_target: &Path,
        skip_config: bool,
    ) -> anyhow::Result<()> {
        let scratch = ScratchTree::new(result_path.join("config"));

        if skip_config {
            // the scratch config dir is still deleted by the guard
            return Ok(());
        }

        sync_dirs(self.writer().as_mut(), scratch.path(), conf_target, "", false)
    }
}
