//! deploykit - validate, package and hand off applications
//!
//! One request names an application and an environment from the catalog.
//! The pipeline validates the application's source tree, builds a versioned
//! artifact with external packaging tools, prepares the target environment
//! and hands the artifact to a transporter. Validators, builders, preparers
//! and transporters are pluggable strategies selected by type tag.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::{
    CancellationFlag, DeployOptions, DeploymentOrchestrator, DeploymentReport, StrategyRegistry,
};
pub use config::{load_catalog, load_settings, Settings};
pub use domain::entities::{
    ApplicationConfig, Artifact, ArtifactKind, DeploymentCatalog, DeploymentRequest,
    EnvironmentConfig,
};
pub use domain::value_objects::{PackageMode, PipelinePhase, Version};
pub use error::{BuildError, DeployError, DeployResult, ErrorKind};
