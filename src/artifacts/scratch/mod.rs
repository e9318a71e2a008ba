use std::path::{Path, PathBuf};

/// Guard over a disposable generated directory.
///
/// Template instantiation leaves `tests/` and `config/` subtrees next to the
/// pipeline code; they only exist to be merged into the project and must be
/// removed whether or not that merge succeeds. Dropping the guard removes the
/// directory on every exit path, including error propagation mid-merge.
#[derive(Debug)]
pub struct ScratchTree {
    path: PathBuf,
}

impl ScratchTree {
    pub fn new(path: PathBuf) -> Self {
        ScratchTree { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchTree {
    fn drop(&mut self) {
        if self.path.exists() {
            // must not panic in drop; a leftover scratch dir is not fatal
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
