//! Environment Preparer Port

use std::sync::Arc;

use super::{DeployEventSink, EventLevel};
use crate::domain::entities::EnvironmentConfig;
use crate::error::DeployResult;

/// Makes an environment ready to receive an artifact
pub trait EnvironmentPreparer: Send {
    fn name(&self) -> &str;

    fn prepare(&self, env: &EnvironmentConfig) -> DeployResult<()>;
}

/// Used for environment types nothing is registered for.
///
/// Emits a notice and succeeds so unknown types never block a deployment.
pub struct NoopPreparer {
    events: Arc<dyn DeployEventSink>,
}

impl NoopPreparer {
    pub fn new(events: Arc<dyn DeployEventSink>) -> Self {
        Self { events }
    }
}

impl EnvironmentPreparer for NoopPreparer {
    fn name(&self) -> &str {
        "noop"
    }

    fn prepare(&self, env: &EnvironmentConfig) -> DeployResult<()> {
        self.events.diagnostic(
            EventLevel::Info,
            self.name(),
            format!(
                "preparation not implemented for environment type '{}'; skipping '{}'",
                env.env_type(),
                env.name()
            ),
        );
        Ok(())
    }
}
