//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `validators/` - Source validators (Python, Perl)
//! - `builders/` - Artifact builders (archive, language package, container)
//! - `environments/` - Environment preparers (VM)
//! - `transport/` - Transporters
//! - `process/` - External tool execution
//! - `events/` - Event sinks (tracing, JSON)
//! - `fs/` - Output layout and checksums

pub mod builders;
pub mod environments;
pub mod events;
pub mod fs;
pub mod process;
pub mod transport;
pub mod validators;

// Re-export for convenience
pub use environments::VmPreparer;
pub use events::{CompositeEventSink, JsonEventSink, TracingEventSink};
pub use process::SystemToolRunner;
pub use transport::PlannedTransfer;
pub use validators::{PerlValidator, PythonValidator};

use crate::application::StrategyRegistry;
use crate::domain::ports::{EnvironmentPreparer, SourceValidator};

/// Register the built-in application and environment types
pub fn register_default_strategies(registry: &mut StrategyRegistry) {
    registry
        .register_app_type(
            builders::PYTHON.language,
            |events| -> Box<dyn SourceValidator> { Box::new(PythonValidator::new(events)) },
            builders::builder_factory(&builders::PYTHON),
        )
        .register_app_type(
            builders::PERL.language,
            |events| -> Box<dyn SourceValidator> { Box::new(PerlValidator::new(events)) },
            builders::builder_factory(&builders::PERL),
        )
        .register_environment_type("vm", |events| -> Box<dyn EnvironmentPreparer> {
            Box::new(VmPreparer::new(events))
        });
}
