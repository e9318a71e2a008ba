use crate::areas::project::{DEFAULT_ENV, Project};
use crate::artifacts::pipeline::PIPELINE_MARKER;
use crate::artifacts::pipeline::artifacts::PipelineArtifacts;
use crate::artifacts::pipeline::pipeline_name::PipelineName;
use anyhow::Context;
use colored::Colorize;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct DeleteOptions {
    pub env: Option<String>,
    pub yes: bool,
}

impl Project {
    pub fn delete_pipeline(&self, name: &str, opts: &DeleteOptions) -> anyhow::Result<()> {
        let name = PipelineName::try_parse(name.to_string())?;

        let env = opts.env.as_deref().unwrap_or(DEFAULT_ENV);
        self.require_env(env)?;

        let artifacts = PipelineArtifacts::locate(self, &name, env);
        let (_, leaf) = name.split_on_last_dot();

        // both the flat and the nested configuration layouts are cleaned up
        let files_to_delete: Vec<PathBuf> = ["parameters", "catalog"]
            .iter()
            .flat_map(|confdir| {
                [
                    PathBuf::from(format!("{}_{}.yml", confdir, leaf)),
                    Path::new(confdir).join(format!("{}.yml", leaf)),
                ]
            })
            .map(|relative_path| artifacts.pipeline_conf.join(relative_path))
            .filter(|path| path.is_file())
            .collect();

        let dirs_to_delete: Vec<PathBuf> = [artifacts.pipeline_dir, artifacts.pipeline_tests]
            .into_iter()
            .filter(|path| path.is_dir())
            .collect();

        for dir_to_delete in &dirs_to_delete {
            self.ensure_no_child_pipelines(dir_to_delete)?;
        }

        if files_to_delete.is_empty() && dirs_to_delete.is_empty() {
            anyhow::bail!("pipeline '{}' not found", name);
        }

        if !opts.yes {
            self.echo_deletion_warning(&dirs_to_delete, &files_to_delete)?;
            writeln!(self.writer())?;

            let confirmed =
                self.confirm(&format!("Are you sure you want to delete pipeline '{}'?", name))?;
            if !confirmed {
                anyhow::bail!("deletion aborted");
            }
        }

        self.delete_artifacts(files_to_delete.iter().chain(dirs_to_delete.iter()))?;

        writeln!(
            self.writer(),
            "\n{}",
            format!("Pipeline '{}' was successfully deleted.", name).green()
        )?;
        writeln!(
            self.writer(),
            "\n{}",
            format!(
                "If you added the pipeline '{}' to '{}', you will need to remove it.",
                name,
                self.registry_path().display()
            )
            .yellow()
        )?;

        Ok(())
    }

    /// A pipeline directory holding another `pipeline.toml` below its own
    /// level belongs to a child pipeline, which must be deleted first.
    fn ensure_no_child_pipelines(&self, dir_to_delete: &Path) -> anyhow::Result<()> {
        for entry in WalkDir::new(dir_to_delete)
            .min_depth(2)
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if entry.file_type().is_file() && entry.file_name() == OsStr::new(PIPELINE_MARKER) {
                let child_dir = entry.path().parent().unwrap_or(entry.path());
                anyhow::bail!(
                    "cannot delete the pipeline '{}' because it contains a child pipeline; \
                    please delete the child pipeline in '{}' before deleting this one",
                    dir_to_delete.display(),
                    child_dir.display()
                );
            }
        }

        Ok(())
    }

    fn echo_deletion_warning(
        &self,
        directories: &[PathBuf],
        files: &[PathBuf],
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            "The following paths will be removed:".bold()
        )?;

        for (label, paths) in [("Directories", directories), ("Files", files)] {
            if paths.is_empty() {
                continue;
            }

            writeln!(self.writer(), "\n{}:", label)?;
            for path in paths {
                writeln!(self.writer(), "  {}", path.display())?;
            }
        }

        Ok(())
    }

    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        write!(self.writer(), "{} [y/N]: ", prompt)?;
        self.writer().flush()?;

        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;

        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    fn delete_artifacts<'a>(
        &self,
        artifacts: impl Iterator<Item = &'a PathBuf>,
    ) -> anyhow::Result<()> {
        for artifact in artifacts {
            write!(self.writer(), "Deleting '{}': ", artifact.display())?;

            let removed = if artifact.is_dir() {
                std::fs::remove_dir_all(artifact)
            } else {
                std::fs::remove_file(artifact)
            };

            match removed {
                Ok(()) => writeln!(self.writer(), "{}", "OK".green())?,
                Err(err) => {
                    writeln!(self.writer(), "{}", "FAILED".red())?;
                    return Err(err)
                        .with_context(|| format!("failed to delete {:?}", artifact));
                }
            }
        }

        Ok(())
    }
}
