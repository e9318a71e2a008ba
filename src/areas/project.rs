use anyhow::Context;
use serde::Deserialize;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "pipeworks.toml";
pub const DEFAULT_ENV: &str = "base";

const DEFAULT_SOURCE_DIR: &str = "src";
const DEFAULT_CONF_SOURCE: &str = "conf";

/// Project manifest, read from `pipeworks.toml` at the project root.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectManifest {
    pub project: ProjectSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default = "default_conf_source")]
    pub conf_source: String,
}

fn default_source_dir() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}

fn default_conf_source() -> String {
    DEFAULT_CONF_SOURCE.to_string()
}

/// A pipeworks project rooted at the directory holding `pipeworks.toml`.
///
/// All user-facing output of the commands flows through the injected writer.
pub struct Project {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    manifest: ProjectManifest,
}

impl Project {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        let manifest_path = path.join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            anyhow::bail!(
                "no '{}' found in {:?}: not a pipeworks project",
                MANIFEST_FILE,
                path
            );
        }

        let manifest = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("failed to read {:?}", manifest_path))?;
        let manifest: ProjectManifest = toml::from_str(&manifest)
            .with_context(|| format!("failed to parse {:?}", manifest_path))?;

        Ok(Project {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn package_name(&self) -> &str {
        &self.manifest.project.name
    }

    pub fn package_dir(&self) -> PathBuf {
        self.path
            .join(&self.manifest.project.source_dir)
            .join(&self.manifest.project.name)
    }

    pub fn pipelines_dir(&self) -> PathBuf {
        self.package_dir().join("pipelines")
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.path.join(&self.manifest.project.source_dir).join("tests")
    }

    pub fn conf_path(&self) -> PathBuf {
        self.path.join(&self.manifest.project.conf_source)
    }

    pub fn local_template_dir(&self) -> PathBuf {
        self.path.join("templates").join("pipeline")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.package_dir().join("registry.toml")
    }

    /// Resolves the configuration directory for `env`, which must already exist.
    pub fn require_env(&self, env: &str) -> anyhow::Result<PathBuf> {
        let env_path = self.conf_path().join(env);
        if !env_path.is_dir() {
            anyhow::bail!(
                "unable to locate environment '{}'; make sure it exists in the project configuration",
                env
            );
        }

        Ok(env_path)
    }
}
