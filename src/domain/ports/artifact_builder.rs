//! Artifact Builder Port

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::{DeployEventSink, ToolRunner};
use crate::domain::entities::{ApplicationConfig, Artifact};
use crate::domain::value_objects::{ToolCommands, Version};
use crate::error::DeployResult;

/// Turns a validated source tree into exactly one artifact file.
///
/// Builders never modify the configured source directory; all tool runs
/// happen in a private workspace that is removed when `build` returns.
pub trait ArtifactBuilder: Send {
    fn name(&self) -> &str;

    fn build(&self, app: &ApplicationConfig, version: &Version) -> DeployResult<Artifact>;
}

/// Everything a builder needs from its surroundings
#[derive(Clone)]
pub struct BuildContext {
    /// Per-application output directory; artifacts land directly inside
    pub output_dir: PathBuf,
    /// Where build workspaces are created (system temp dir when `None`)
    pub workspace_parent: Option<PathBuf>,
    pub tools: ToolCommands,
    pub tool_timeout: Option<Duration>,
    pub runner: Arc<dyn ToolRunner>,
    pub events: Arc<dyn DeployEventSink>,
}

impl std::fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("output_dir", &self.output_dir)
            .field("workspace_parent", &self.workspace_parent)
            .field("tools", &self.tools)
            .field("tool_timeout", &self.tool_timeout)
            .finish_non_exhaustive()
    }
}
