//! Source Validator Port

use crate::domain::entities::ApplicationConfig;
use crate::error::DeployResult;

/// Checks that an application's source tree is fit to package.
///
/// `Ok(false)` means the tree was inspected and rejected (the reason is
/// reported through the event sink). `Err` is reserved for configuration
/// problems such as a missing `source_dir` key.
pub trait SourceValidator: Send {
    fn name(&self) -> &str;

    fn validate(&self, app: &ApplicationConfig) -> DeployResult<bool>;
}
