//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Logging setup
//! - Creating the orchestrator with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `logging` - `tracing` subscriber installation
//! - `factory` - Wires ports to their default implementations
//!
//! ## Usage
//!
//! ```ignore
//! use deploykit::presentation::factory;
//!
//! let orchestrator = factory::create_orchestrator(catalog, &settings, events);
//! let report = orchestrator.run(&request);
//! ```

pub mod cli;
pub mod factory;
pub mod logging;

pub use cli::Cli;
pub use factory::{create_event_sink, create_orchestrator, deploy_options};
pub use logging::init_logging;
