//! Transporter that records the hand-off without moving anything

use std::sync::Arc;

use crate::domain::entities::{Artifact, EnvironmentConfig};
use crate::domain::ports::{
    DeliveryOptions, DeployEvent, DeployEventSink, EventLevel, Transporter,
};
use crate::error::DeployResult;

/// Reports "would transfer" and succeeds. Trivially idempotent.
pub struct PlannedTransfer {
    events: Arc<dyn DeployEventSink>,
}

impl PlannedTransfer {
    pub fn new(events: Arc<dyn DeployEventSink>) -> Self {
        Self { events }
    }
}

impl Transporter for PlannedTransfer {
    fn name(&self) -> &str {
        "planned"
    }

    fn deliver(
        &self,
        artifact: &Artifact,
        env: &EnvironmentConfig,
        options: &DeliveryOptions,
    ) -> DeployResult<bool> {
        let targets = if env.hosts().is_empty() {
            format!("environment '{}'", env.name())
        } else {
            env.hosts().join(", ")
        };
        let prefix = if options.test_mode { "[test] " } else { "" };
        self.events.diagnostic(
            EventLevel::Info,
            self.name(),
            format!(
                "{}would transfer {} to {}",
                prefix,
                artifact.path().display(),
                targets
            ),
        );
        self.events.on_event(DeployEvent::TransferPlanned {
            artifact: artifact.path().to_path_buf(),
            environment: env.name().to_string(),
            hosts: env.hosts().to_vec(),
            test_mode: options.test_mode,
        });
        Ok(true)
    }
}
