//! Settings types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ToolCommands;

/// Contents of a `deploykit.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub build: BuildSettings,
    pub tools: ToolCommands,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Root of the per-application output directories
    pub output_dir: PathBuf,
    /// Parent for temporary build workspaces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_dir: Option<PathBuf>,
    /// Per-tool time limit; absent or 0 means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_timeout_secs: Option<u64>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("build"),
            workspace_dir: None,
            tool_timeout_secs: None,
        }
    }
}

impl BuildSettings {
    pub fn tool_timeout(&self) -> Option<Duration> {
        self.tool_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
