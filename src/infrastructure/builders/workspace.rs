//! Temporary build workspaces

use std::path::Path;

use tempfile::TempDir;

use crate::error::BuildError;

pub const WORKSPACE_PREFIX: &str = "deploykit-build-";

/// A private directory for one build, removed when dropped.
///
/// Dropping happens on every exit path out of a builder, including `?`
/// returns and unwinding panics.
#[derive(Debug)]
pub struct BuildWorkspace {
    dir: TempDir,
}

impl BuildWorkspace {
    /// Create a workspace under `parent`, or the system temp dir
    pub fn create(parent: Option<&Path>) -> Result<Self, BuildError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);
        let dir = match parent {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(BuildError::Workspace)?;
                builder.tempdir_in(parent)
            }
            None => builder.tempdir(),
        }
        .map_err(BuildError::Workspace)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
