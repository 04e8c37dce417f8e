//! Deploy Event Port
//!
//! Provides an observable interface for the deployment pipeline.
//! Enables progress reporting, JSON event streams, and debugging.
//!
//! Components never print or log directly; everything a user might want to
//! see goes through a [`DeployEventSink`].

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::ArtifactKind;
use crate::domain::value_objects::PipelinePhase;
use crate::error::ErrorKind;

/// Severity of a free-form diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl EventLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLevel::Debug => "debug",
            EventLevel::Info => "info",
            EventLevel::Warn => "warn",
            EventLevel::Error => "error",
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during a deployment
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Pipeline started
    Started {
        app: String,
        environment: String,
        version: String,
        test_mode: bool,
    },

    /// The state machine moved to a new phase
    PhaseEntered { phase: PipelinePhase },

    /// Something a component wants the operator to know
    Diagnostic {
        level: EventLevel,
        component: String,
        message: String,
    },

    /// An external tool is about to run
    ToolInvoked { command: String, cwd: PathBuf },

    /// The builder produced its artifact
    ArtifactBuilt {
        path: PathBuf,
        kind: ArtifactKind,
        size_bytes: u64,
        checksum: String,
    },

    /// Environment preparation checked its hosts
    HostsPrepared {
        environment: String,
        hosts: Vec<String>,
    },

    /// The transporter recorded what it would deliver
    TransferPlanned {
        artifact: PathBuf,
        environment: String,
        hosts: Vec<String>,
        test_mode: bool,
    },

    /// Pipeline stopped with an error
    Failed {
        phase: PipelinePhase,
        kind: ErrorKind,
        error: String,
    },

    /// Pipeline finished successfully
    Completed { artifact: PathBuf, elapsed_ms: u128 },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - TracingEventSink: human-readable log lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (tool invocations, debug
    /// diagnostics)
    fn wants_detailed_events(&self) -> bool {
        true
    }

    /// Shorthand for emitting a [`DeployEvent::Diagnostic`]
    fn diagnostic(&self, level: EventLevel, component: &str, message: String) {
        if level == EventLevel::Debug && !self.wants_detailed_events() {
            return;
        }
        self.on_event(DeployEvent::Diagnostic {
            level,
            component: component.to_string(),
            message,
        });
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
