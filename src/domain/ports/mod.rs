//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_builder;
pub mod deploy_events;
pub mod environment_preparer;
pub mod source_validator;
pub mod tool_runner;
pub mod transporter;

pub use artifact_builder::{ArtifactBuilder, BuildContext};
pub use deploy_events::{DeployEvent, DeployEventSink, EventLevel, NoopEventSink};
pub use environment_preparer::{EnvironmentPreparer, NoopPreparer};
pub use source_validator::SourceValidator;
pub use tool_runner::{ToolError, ToolInvocation, ToolOutput, ToolRunner};
pub use transporter::{DeliveryOptions, Transporter};
