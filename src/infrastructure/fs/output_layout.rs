//! Per-application output directories

use std::io;
use std::path::{Path, PathBuf};

/// `<root>/<app name>/` holds every artifact built for that application.
///
/// Computing a path never touches the disk; only
/// [`ensure_app_dir`](Self::ensure_app_dir) creates directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_dir(&self, app_name: &str) -> PathBuf {
        self.root.join(app_name)
    }

    /// Create the application's output directory if missing. Idempotent.
    pub fn ensure_app_dir(&self, app_name: &str) -> io::Result<PathBuf> {
        let dir = self.app_dir(app_name);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
