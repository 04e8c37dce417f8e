//! Error types for deploykit
//!
//! Library code returns [`DeployError`]; the binary wraps setup failures in
//! `anyhow` before the pipeline starts.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ToolError;

/// Result type alias for deploykit operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Coarse classification of a [`DeployError`].
///
/// Every failure the pipeline can report falls in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown names, missing keys, malformed files. Aborts before any side effect.
    Configuration,
    /// Source tree missing or rejected by the validator.
    Validation,
    /// Packaging failed.
    Build,
    /// Environment preparation failed.
    Prepare,
    /// Artifact hand-off failed or was declined.
    Transfer,
    /// Stopped between phases on request.
    Cancelled,
    /// A bug: panic or impossible state transition.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Validation => "validation",
            ErrorKind::Build => "build",
            ErrorKind::Prepare => "prepare",
            ErrorKind::Transfer => "transfer",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for deployment operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Application name absent from the loaded catalog
    #[error("application '{name}' not found in configuration")]
    ApplicationNotFound { name: String },

    /// Environment name absent from the loaded catalog
    #[error("environment '{name}' not found in configuration")]
    EnvironmentNotFound { name: String },

    /// A key the pipeline needs was not configured
    #[error("missing required key '{key}' for {owner}")]
    MissingConfigKey { key: String, owner: String },

    /// An option is present but has the wrong shape
    #[error("invalid option '{key}' for {owner}: {message}")]
    InvalidOption {
        key: String,
        owner: String,
        message: String,
    },

    /// A catalog name cannot be used as a path component
    #[error("invalid {what} name '{name}': {reason}")]
    InvalidName {
        what: &'static str,
        name: String,
        reason: String,
    },

    /// No strategy registered for the configured application type
    #[error("no {component} registered for application type '{app_type}'")]
    UnsupportedAppType {
        app_type: String,
        component: &'static str,
    },

    /// The application type exists but does not offer this packaging mode
    #[error("application type '{app_type}' does not support package type '{mode}'")]
    UnsupportedPackageMode { app_type: String, mode: String },

    /// `package_type` is not one of the known modes
    #[error("unknown package type '{value}' (expected tarball, wheel or docker)")]
    UnknownPackageType { value: String },

    /// Caller-supplied version cannot be used in artifact names
    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// A configuration file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// The validator rejected the source tree
    #[error("validation failed for application '{app}'")]
    ValidationFailed { app: String },

    /// Packaging failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Environment preparation failed
    #[error("failed to prepare environment '{environment}': {message}")]
    PrepareFailed {
        environment: String,
        message: String,
    },

    /// The transporter returned `false`
    #[error("transporter '{transporter}' declined delivery of {}", .artifact.display())]
    TransferDeclined {
        transporter: String,
        artifact: PathBuf,
    },

    /// The transporter failed part-way
    #[error("transfer to '{environment}' failed: {message}")]
    TransferFailed {
        environment: String,
        message: String,
    },

    /// The cancellation flag was raised between phases
    #[error("deployment cancelled before {phase}")]
    Cancelled { phase: String },

    /// Panic or invalid state transition inside the pipeline
    #[error("internal error: {0}")]
    Internal(String),
}

impl DeployError {
    /// Map this error onto the failure taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeployError::ApplicationNotFound { .. }
            | DeployError::EnvironmentNotFound { .. }
            | DeployError::MissingConfigKey { .. }
            | DeployError::InvalidOption { .. }
            | DeployError::InvalidName { .. }
            | DeployError::UnsupportedAppType { .. }
            | DeployError::UnsupportedPackageMode { .. }
            | DeployError::UnknownPackageType { .. }
            | DeployError::InvalidVersion { .. }
            | DeployError::ConfigRead { .. }
            | DeployError::InvalidConfig { .. } => ErrorKind::Configuration,
            DeployError::ValidationFailed { .. } => ErrorKind::Validation,
            DeployError::Build(_) => ErrorKind::Build,
            DeployError::PrepareFailed { .. } => ErrorKind::Prepare,
            DeployError::TransferDeclined { .. } | DeployError::TransferFailed { .. } => {
                ErrorKind::Transfer
            }
            DeployError::Cancelled { .. } => ErrorKind::Cancelled,
            DeployError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Render the error together with every distinct cause in its source chain.
    pub fn detailed(&self) -> String {
        format_chain(self)
    }
}

/// Packaging failures raised by artifact builders
#[derive(Error, Debug)]
pub enum BuildError {
    /// The staged source tree lacks the file the language tool needs
    #[error("missing build descriptor '{descriptor}' in {}", .dir.display())]
    MissingDescriptor { descriptor: String, dir: PathBuf },

    /// An external tool ran and exited unsuccessfully
    #[error("`{command}` failed with {status}{}", stderr_suffix(.stderr))]
    ToolFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An external tool could not be run to completion
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The language tool succeeded but left no package behind
    #[error("build produced no artifact matching '*{suffix}' in {}", .dir.display())]
    NoArtifact { suffix: String, dir: PathBuf },

    /// The language tool left several candidate packages behind
    #[error(
        "build produced {} artifacts matching '*{suffix}': {}",
        .candidates.len(),
        join_paths(.candidates)
    )]
    AmbiguousArtifact {
        suffix: String,
        candidates: Vec<PathBuf>,
    },

    /// The temporary build workspace could not be created
    #[error("failed to create build workspace: {0}")]
    Workspace(#[source] std::io::Error),

    /// Copying the source tree into the workspace failed
    #[error("failed to stage {} into the build workspace: {message}", .source_dir.display())]
    Staging { source_dir: PathBuf, message: String },

    /// Filesystem error on a specific path
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format an error and its causes, skipping causes already contained in the
/// rendered text (transparent wrappers would otherwise repeat themselves).
pub fn format_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str("\n  caused by: ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_application_not_found() {
        let err = DeployError::ApplicationNotFound {
            name: "billing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "application 'billing' not found in configuration"
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_error_display_missing_descriptor() {
        let err = BuildError::MissingDescriptor {
            descriptor: "setup.py".to_string(),
            dir: PathBuf::from("/tmp/ws/source"),
        };
        assert_eq!(
            err.to_string(),
            "missing build descriptor 'setup.py' in /tmp/ws/source"
        );
    }

    #[test]
    fn build_errors_are_build_kind() {
        let err: DeployError = BuildError::NoArtifact {
            suffix: ".whl".to_string(),
            dir: PathBuf::from("dist"),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Build);
    }

    #[test]
    fn tool_failure_includes_stderr() {
        let err = BuildError::ToolFailed {
            command: "docker build -t app:1 .".to_string(),
            status: "exit code 1".to_string(),
            stderr: "no space left on device\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`docker build -t app:1 .` failed with exit code 1:\nno space left on device"
        );
    }

    #[test]
    fn ambiguous_artifact_lists_candidates() {
        let err = BuildError::AmbiguousArtifact {
            suffix: ".whl".to_string(),
            candidates: vec![PathBuf::from("dist/a.whl"), PathBuf::from("dist/b.whl")],
        };
        assert_eq!(
            err.to_string(),
            "build produced 2 artifacts matching '*.whl': dist/a.whl, dist/b.whl"
        );
    }

    #[test]
    fn format_chain_skips_repeated_causes() {
        let err = DeployError::ConfigRead {
            path: PathBuf::from("config/apps.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let rendered = format_chain(&err);
        assert_eq!(rendered, "failed to read config/apps.yaml: gone");
    }
}
