//! Tool Runner Port
//!
//! External programs (tar, python, perl, make, docker) are launched through
//! this trait so builders can be exercised without the real tools installed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// One external command: program, arguments, working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
    timeout: Option<Duration>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.timeout
    }

    /// Space-joined command line for logs and error messages
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` when killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    pub fn status_description(&self) -> String {
        match self.status {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }
}

/// The tool could not be run to completion
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` did not finish within {timeout:?}")]
    TimedOut { command: String, timeout: Duration },

    #[error("failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs external tools to completion, capturing their output
pub trait ToolRunner: Send + Sync {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, ToolError>;
}
