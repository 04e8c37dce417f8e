//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--version` takes the artifact version; the tool's own version is not
//!   exposed as a flag
//! - CLI values override settings files and environment variables

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// deploykit - validate, package and hand off an application to an environment
#[derive(Parser, Debug)]
#[command(name = "deploykit")]
#[command(author, about, long_about = None)]
#[command(after_help = "Exit status is 0 when the deployment succeeds and 1 otherwise.")]
pub struct Cli {
    /// Application name, as listed in apps.yaml
    pub app: String,

    /// Environment name, as listed in environments.yaml
    pub environment: String,

    /// Artifact version (default: local time as YYYYMMDD.HHMMSS)
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Mark the run as a test deployment
    #[arg(long)]
    pub test: bool,

    /// Directory holding apps.yaml, environments.yaml and deploykit.toml
    #[arg(long, default_value = "config", value_name = "DIR")]
    pub config_dir: PathBuf,

    /// Root directory for built artifacts
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Kill any external tool running longer than this (0 disables)
    #[arg(long, value_name = "SECS")]
    pub tool_timeout: Option<u64>,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Layer CLI flags over loaded settings
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.output_dir {
            settings.build.output_dir = dir.clone();
        }
        if let Some(secs) = self.tool_timeout {
            settings.build.tool_timeout_secs = Some(secs);
        }
        settings
    }
}
