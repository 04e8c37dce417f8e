//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod package_mode;
mod path_component;
mod phase;
mod tools;
mod version;

pub use config_warning::ConfigWarning;
pub use package_mode::PackageMode;
pub use path_component::check_path_component;
pub use phase::PipelinePhase;
pub use tools::ToolCommands;
pub use version::{Version, VERSION_TIMESTAMP_FORMAT};
