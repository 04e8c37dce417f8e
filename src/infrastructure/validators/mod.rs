//! Source Validators
//!
//! One validator per application type. All share the base rule (the
//! configured `source_dir` must be an existing directory) and may add
//! stricter checks of their own.

mod perl;
mod python;

pub use perl::PerlValidator;
pub use python::PythonValidator;

use std::path::Path;

use crate::domain::entities::ApplicationConfig;
use crate::domain::ports::{DeployEventSink, EventLevel};
use crate::error::DeployResult;

/// Base rule shared by every validator.
///
/// Returns the source directory when it exists, `None` after reporting why
/// when it does not. A missing `source_dir` key is an error.
fn existing_source_dir<'a>(
    app: &'a ApplicationConfig,
    events: &dyn DeployEventSink,
    component: &str,
) -> DeployResult<Option<&'a Path>> {
    let source_dir = app.require_source_dir()?;
    if source_dir.is_dir() {
        Ok(Some(source_dir))
    } else {
        events.diagnostic(
            EventLevel::Error,
            component,
            format!("source directory not found: {}", source_dir.display()),
        );
        Ok(None)
    }
}

/// If `entry_point` is configured it must name a file under `source_dir`
fn entry_point_present(
    app: &ApplicationConfig,
    source_dir: &Path,
    events: &dyn DeployEventSink,
    component: &str,
) -> bool {
    let Some(entry_point) = app.options().get_str("entry_point") else {
        return true;
    };
    let candidate = source_dir.join(entry_point);
    if candidate.is_file() {
        true
    } else {
        events.diagnostic(
            EventLevel::Error,
            component,
            format!("entry point '{}' not found in {}", entry_point, source_dir.display()),
        );
        false
    }
}
