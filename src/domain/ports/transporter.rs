//! Transporter Port
//!
//! Hands a finished artifact to an environment.
//!
//! Contract:
//! - `Ok(true)`: the artifact is (or already was) in place
//! - `Ok(false)`: the transporter declined; the pipeline fails with a
//!   transfer error and nothing is rolled back
//! - `Err(_)`: the hand-off failed part-way; partial state is left for the
//!   operator. Implementations report this as
//!   [`DeployError::TransferFailed`](crate::error::DeployError::TransferFailed)
//!   naming the environment, which classifies as a transfer error
//!
//! Delivering the same artifact twice must be harmless.

use crate::domain::entities::{Artifact, EnvironmentConfig};
use crate::error::DeployResult;

/// Per-run switches the transporter honours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub test_mode: bool,
}

pub trait Transporter: Send + Sync {
    fn name(&self) -> &str;

    fn deliver(
        &self,
        artifact: &Artifact,
        env: &EnvironmentConfig,
        options: &DeliveryOptions,
    ) -> DeployResult<bool>;
}
