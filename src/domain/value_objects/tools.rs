//! External tool names

use serde::{Deserialize, Serialize};

/// Program names (or paths) used for each external packaging tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCommands {
    pub tar: String,
    pub python: String,
    pub perl: String,
    pub make: String,
    pub docker: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            tar: "tar".to_string(),
            python: "python3".to_string(),
            perl: "perl".to_string(),
            make: "make".to_string(),
            docker: "docker".to_string(),
        }
    }
}
