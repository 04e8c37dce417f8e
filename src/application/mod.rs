//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain packaging or validation rules (those are strategies)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeploymentOrchestrator` - validate, package, prepare, hand off
//!
//! ## Services
//!
//! - `StrategyRegistry` - maps application and environment type tags to
//!   strategy factories

pub mod deploy;
pub mod registry;

pub use deploy::{
    CancellationFlag, DeployOptions, DeploymentOrchestrator, DeploymentReport, PipelineState,
};
pub use registry::{BuilderFactory, PreparerFactory, StrategyRegistry, ValidatorFactory};
