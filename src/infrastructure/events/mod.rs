//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - TracingEventSink: Human-readable log lines through `tracing`
//! - JsonEventSink: NDJSON output for CI/automation
//! - CompositeEventSink: Fan-out to several sinks

mod composite;
mod json;
mod tracing;

pub use self::tracing::TracingEventSink;
pub use composite::CompositeEventSink;
pub use json::JsonEventSink;
