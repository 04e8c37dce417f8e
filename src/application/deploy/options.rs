//! Deploy Options

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::value_objects::ToolCommands;

/// Settings shared by every phase of a run
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Parent of the per-application output directories
    pub output_root: PathBuf,
    /// Parent for build workspaces (system temp dir when unset)
    pub workspace_dir: Option<PathBuf>,
    /// Upper bound for each external tool; unbounded when unset
    pub tool_timeout: Option<Duration>,
    pub tools: ToolCommands,
}

impl DeployOptions {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            workspace_dir: None,
            tool_timeout: None,
            tools: ToolCommands::default(),
        }
    }

    pub fn with_workspace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace_dir = Some(dir.into());
        self
    }

    pub fn with_tool_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.tool_timeout = timeout;
        self
    }

    pub fn with_tools(mut self, tools: ToolCommands) -> Self {
        self.tools = tools;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new("build")
    }
}
