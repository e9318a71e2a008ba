//! Pipeline template instantiation
//!
//! A pipeline template is a directory tree whose path components and file
//! contents may contain the `{{ pipeline_name }}` placeholder. Instantiation
//! renders the tree under an output directory, overwriting files that are
//! already there so a pipeline can be created in the parent folder of an
//! existing one. The generated `tests/` and `config/` subtrees are merged
//! into the project by the caller and deleted afterwards.

use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const PLACEHOLDER: &str = "{{ pipeline_name }}";

const DEFAULT_PIPELINE_TOML: &str = r#"# Pipeline definition for '{{ pipeline_name }}'.
name = "{{ pipeline_name }}"
description = "Modular pipeline '{{ pipeline_name }}'"

# Each node maps named inputs to named outputs; wire them up here.
nodes = []
"#;

const DEFAULT_README_MD: &str = r#"# Pipeline {{ pipeline_name }}

## Overview

Describe what this modular pipeline does.

## Pipeline inputs and outputs

Describe the datasets this pipeline consumes and produces.
"#;

const DEFAULT_PIPELINE_TEST_TOML: &str = r#"# Smoke checks for pipeline '{{ pipeline_name }}', run by the project test runner.
pipeline = "{{ pipeline_name }}"

[[checks]]
name = "{{ pipeline_name }}_assembles"
"#;

const DEFAULT_PARAMETERS_YML: &str = r#"# Parameters for pipeline '{{ pipeline_name }}'.
"#;

/// The default template shipped with the binary, as (relative path, content)
/// pairs rooted at the `{{ pipeline_name }}` directory.
const DEFAULT_TEMPLATE: &[(&str, &str)] = &[
    ("{{ pipeline_name }}/pipeline.toml", DEFAULT_PIPELINE_TOML),
    ("{{ pipeline_name }}/README.md", DEFAULT_README_MD),
    (
        "{{ pipeline_name }}/tests/pipeline_test.toml",
        DEFAULT_PIPELINE_TEST_TOML,
    ),
    (
        "{{ pipeline_name }}/config/parameters_{{ pipeline_name }}.yml",
        DEFAULT_PARAMETERS_YML,
    ),
];

/// Where the template comes from, in decreasing precedence: a directory named
/// on the command line, the project-local `templates/pipeline` directory, or
/// the built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Dir(PathBuf),
    Builtin,
}

impl TemplateSource {
    pub fn resolve(cli_path: Option<PathBuf>, local_template_dir: PathBuf) -> anyhow::Result<Self> {
        if let Some(path) = cli_path {
            if !path.is_dir() {
                anyhow::bail!("template directory {:?} does not exist", path);
            }
            return Ok(TemplateSource::Dir(path));
        }

        if local_template_dir.is_dir() {
            return Ok(TemplateSource::Dir(local_template_dir));
        }

        Ok(TemplateSource::Builtin)
    }

    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Dir(path) => path.display().to_string(),
            TemplateSource::Builtin => "built-in default".to_string(),
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct TemplateContext {
    pipeline_name: String,
}

impl TemplateContext {
    fn render(&self, text: &str) -> String {
        text.replace(PLACEHOLDER, &self.pipeline_name)
    }

    fn render_path(&self, path: &Path) -> PathBuf {
        path.components()
            .map(|component| self.render(&component.as_os_str().to_string_lossy()))
            .collect()
    }
}

/// Renders `source` under `output_dir` and returns the rendered root
/// directory (`output_dir/<pipeline name>`).
pub fn instantiate(
    source: &TemplateSource,
    output_dir: &Path,
    ctx: &TemplateContext,
) -> anyhow::Result<PathBuf> {
    let root = match source {
        TemplateSource::Builtin => {
            for (relative_path, content) in DEFAULT_TEMPLATE {
                let rendered_path = output_dir.join(ctx.render_path(Path::new(relative_path)));
                write_rendered_file(&rendered_path, &ctx.render(content))?;
            }

            PathBuf::from(&ctx.pipeline_name)
        }
        TemplateSource::Dir(template_dir) => {
            let template_root = single_top_level_dir(template_dir)?;

            for entry in WalkDir::new(&template_root) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let relative_path = entry
                    .path()
                    .strip_prefix(template_dir)
                    .with_context(|| format!("failed to relativize {:?}", entry.path()))?;
                let rendered_path = output_dir.join(ctx.render_path(relative_path));

                let content = std::fs::read_to_string(entry.path())
                    .with_context(|| format!("failed to read template file {:?}", entry.path()))?;
                write_rendered_file(&rendered_path, &ctx.render(&content))?;
            }

            ctx.render_path(Path::new(
                template_root
                    .file_name()
                    .with_context(|| format!("template root {:?} has no name", template_root))?,
            ))
        }
    };

    Ok(output_dir.join(root))
}

fn write_rendered_file(path: &Path, content: &str) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("rendered path {:?} has no parent", path))?;
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory {:?}", parent))?;
    std::fs::write(path, content).with_context(|| format!("failed to write {:?}", path))?;

    Ok(())
}

/// A template directory must hold exactly one top-level directory, the
/// (usually placeholder-named) pipeline root.
fn single_top_level_dir(template_dir: &Path) -> anyhow::Result<PathBuf> {
    let entries = std::fs::read_dir(template_dir)
        .with_context(|| format!("failed to list template directory {:?}", template_dir))?
        .collect::<Result<Vec<_>, _>>()?;

    match entries.as_slice() {
        [entry] if entry.path().is_dir() => Ok(entry.path()),
        _ => anyhow::bail!(
            "template directory {:?} must contain exactly one top-level directory",
            template_dir
        ),
    }
}
