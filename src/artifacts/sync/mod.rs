//! Directory merge-copier
//!
//! Recursively copies a `source` file or directory into a `target` directory
//! without destroying anything already present in the target, using the
//! following rules:
//!
//! 1. A source file whose name collides with an existing target file is
//!    skipped, unless `overwrite` is set. A source file whose name collides
//!    with an existing target directory is always skipped.
//! 2. Any other source file is copied byte for byte, creating the target
//!    directory on demand.
//! 3. A source directory always recurses into the same-named target
//!    subdirectory, merging the two trees.

use anyhow::Context;
use colored::Colorize;
use std::collections::HashSet;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

const INDENT_STEP: &str = "  ";

/// Merges `source` into `target`, reporting one status line per item through
/// `writer`. A non-existent source is a no-op. The first I/O failure aborts
/// the merge, leaving already-copied items in place.
///
/// The target's entries are listed once per directory level; `overwrite`
/// applies to the current level only and is not carried into recursion.
pub fn sync_dirs(
    writer: &mut dyn Write,
    source: &Path,
    target: &Path,
    prefix: &str,
    overwrite: bool,
) -> anyhow::Result<()> {
    let mut existing_files: HashSet<OsString> = HashSet::new();
    let mut existing_folders: HashSet<OsString> = HashSet::new();

    if target.is_dir() {
        let entries = std::fs::read_dir(target)
            .with_context(|| format!("failed to list target directory {:?}", target))?;

        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                existing_folders.insert(entry.file_name());
            } else {
                existing_files.insert(entry.file_name());
            }
        }
    }

    let content: Vec<PathBuf> = if source.is_dir() {
        let entries = std::fs::read_dir(source)
            .with_context(|| format!("failed to list source directory {:?}", source))?;

        entries
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<_, _>>()?
    } else if source.is_file() {
        vec![source.to_path_buf()]
    } else {
        // nothing to copy
        Vec::new()
    };

    for source_path in content {
        let source_name = source_path
            .file_name()
            .with_context(|| format!("source path {:?} has no file name", source_path))?
            .to_os_string();
        let target_path = target.join(&source_name);

        write!(writer, "{}Creating '{}': ", prefix, target_path.display())?;

        let source_is_file = source_path.is_file();
        let collides_with_file = existing_files.contains(&source_name);
        let collides_with_folder = existing_folders.contains(&source_name);

        if source_is_file && ((collides_with_file && !overwrite) || collides_with_folder) {
            // rule #1
            writeln!(writer, "{}", "SKIPPED (already exists)".yellow())?;
        } else if source_is_file {
            // rule #2
            match copy_file(&source_path, target, &target_path) {
                Ok(()) => writeln!(writer, "{}", "OK".green())?,
                Err(err) => {
                    writeln!(writer, "{}", "FAILED".red())?;
                    return Err(err);
                }
            }
        } else {
            // rule #3
            writeln!(writer)?;
            let nested_prefix = format!("{}{}", prefix, INDENT_STEP);
            sync_dirs(writer, &source_path, &target_path, &nested_prefix, false)?;
        }
    }

    Ok(())
}

fn copy_file(source: &Path, target_dir: &Path, target: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(target_dir)
        .with_context(|| format!("failed to create directory {:?}", target_dir))?;
    std::fs::copy(source, target)
        .with_context(|| format!("failed to copy {:?} to {:?}", source, target))?;

    Ok(())
}
