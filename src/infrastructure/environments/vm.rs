//! Virtual machine environments

use std::sync::Arc;

use crate::domain::entities::EnvironmentConfig;
use crate::domain::ports::{DeployEvent, DeployEventSink, EnvironmentPreparer, EventLevel};
use crate::error::{DeployError, DeployResult};

/// Checks the host list and reports what would be prepared.
///
/// No connection is made to any host.
pub struct VmPreparer {
    events: Arc<dyn DeployEventSink>,
}

impl VmPreparer {
    pub fn new(events: Arc<dyn DeployEventSink>) -> Self {
        Self { events }
    }
}

impl EnvironmentPreparer for VmPreparer {
    fn name(&self) -> &str {
        "vm"
    }

    fn prepare(&self, env: &EnvironmentConfig) -> DeployResult<()> {
        let hosts = env.hosts();
        if let Some(bad) = hosts
            .iter()
            .find(|h| h.is_empty() || h.chars().any(char::is_whitespace))
        {
            return Err(DeployError::PrepareFailed {
                environment: env.name().to_string(),
                message: format!("invalid host name '{}'", bad),
            });
        }

        if hosts.is_empty() {
            self.events.diagnostic(
                EventLevel::Warn,
                self.name(),
                format!("environment '{}' has no hosts configured", env.name()),
            );
        } else {
            self.events.diagnostic(
                EventLevel::Info,
                self.name(),
                format!("would prepare VM environment on hosts: {}", hosts.join(", ")),
            );
        }
        self.events.on_event(DeployEvent::HostsPrepared {
            environment: env.name().to_string(),
            hosts: hosts.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingEventSink;

    fn messages(events: &RecordingEventSink) -> Vec<(EventLevel, String)> {
        events
            .events()
            .into_iter()
            .filter_map(|e| match e {
                DeployEvent::Diagnostic { level, message, .. } => Some((level, message)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn reports_configured_hosts() {
        let events = Arc::new(RecordingEventSink::new());
        let env = EnvironmentConfig::new("E", "vm").with_hosts(["h1", "h2"]);
        VmPreparer::new(events.clone()).prepare(&env).unwrap();

        assert_eq!(
            messages(&events),
            [(
                EventLevel::Info,
                "would prepare VM environment on hosts: h1, h2".to_string()
            )]
        );
    }

    #[test]
    fn empty_host_list_is_a_warning() {
        let events = Arc::new(RecordingEventSink::new());
        let env = EnvironmentConfig::new("E", "vm");
        VmPreparer::new(events.clone()).prepare(&env).unwrap();
        assert_eq!(messages(&events)[0].0, EventLevel::Warn);
    }

    #[test]
    fn blank_or_spaced_hosts_are_rejected() {
        let preparer = VmPreparer::new(Arc::new(RecordingEventSink::new()));
        for bad in ["", "web 1", " "] {
            let env = EnvironmentConfig::new("E", "vm").with_hosts(["ok", bad]);
            assert!(matches!(
                preparer.prepare(&env),
                Err(DeployError::PrepareFailed { .. })
            ));
        }
    }
}
