//! Deploy Module
//!
//! Orchestrates one deployment request.
//!
//! ## Structure
//!
//! - `options` - Run-wide settings (`DeployOptions`)
//! - `state` - Phase tracking (`PipelineState`)
//! - `cancel` - Cooperative cancellation (`CancellationFlag`)
//! - `result` - Outcome of a run (`DeploymentReport`)
//! - `use_case` - The pipeline itself (`DeploymentOrchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use deploykit::application::deploy::{DeployOptions, DeploymentOrchestrator};
//!
//! let orchestrator = DeploymentOrchestrator::new(catalog, registry, options, runner, transporter, events);
//! let report = orchestrator.run(&request);
//! ```

mod cancel;
mod options;
mod result;
mod state;
mod use_case;

pub use cancel::CancellationFlag;
pub use options::DeployOptions;
pub use result::DeploymentReport;
pub use state::PipelineState;
pub use use_case::DeploymentOrchestrator;
