//! Event sink that renders events as log lines

use ::tracing::{debug, error, info, warn};

use crate::domain::ports::{DeployEvent, DeployEventSink, EventLevel};

/// Forwards events to the installed `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink {
    detailed: bool,
}

impl TracingEventSink {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }
}

impl DeployEventSink for TracingEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                app,
                environment,
                version,
                test_mode,
            } => info!(%app, %environment, %version, test_mode, "deployment started"),
            DeployEvent::PhaseEntered { phase } => debug!(%phase, "phase entered"),
            DeployEvent::Diagnostic {
                level,
                component,
                message,
            } => match level {
                EventLevel::Debug => debug!(%component, "{}", message),
                EventLevel::Info => info!(%component, "{}", message),
                EventLevel::Warn => warn!(%component, "{}", message),
                EventLevel::Error => error!(%component, "{}", message),
            },
            DeployEvent::ToolInvoked { command, cwd } => {
                debug!(%command, cwd = %cwd.display(), "running tool")
            }
            DeployEvent::ArtifactBuilt {
                path,
                kind,
                size_bytes,
                checksum,
            } => info!(
                path = %path.display(),
                %kind,
                size_bytes,
                %checksum,
                "artifact built"
            ),
            DeployEvent::HostsPrepared { environment, hosts } => {
                debug!(%environment, hosts = hosts.len(), "hosts prepared")
            }
            DeployEvent::TransferPlanned {
                artifact,
                environment,
                ..
            } => debug!(artifact = %artifact.display(), %environment, "transfer planned"),
            DeployEvent::Failed { phase, kind, error } => {
                error!(%phase, %kind, "deployment failed: {}", error)
            }
            DeployEvent::Completed {
                artifact,
                elapsed_ms,
            } => info!(
                artifact = %artifact.display(),
                elapsed_ms = elapsed_ms as u64,
                "deployment succeeded"
            ),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
