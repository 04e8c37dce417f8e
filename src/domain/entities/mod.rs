//! Domain Entities
//!
//! - `ApplicationConfig` - One deployable application
//! - `EnvironmentConfig` - One deployment target
//! - `DeploymentCatalog` - Both sets, addressable by exact name
//! - `DeploymentRequest` - One invocation of the pipeline
//! - `Artifact` - The output of a successful build

mod application;
mod artifact;
mod catalog;
mod environment;
mod options;
mod request;

pub use application::ApplicationConfig;
pub use artifact::{artifact_file_name, Artifact, ArtifactKind};
pub use catalog::DeploymentCatalog;
pub use environment::EnvironmentConfig;
pub use options::OptionBag;
pub use request::DeploymentRequest;
