//! Orchestrator Factory
//!
//! Creates the orchestrator with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DeployOptions, DeploymentOrchestrator, StrategyRegistry};
use crate::config::Settings;
use crate::domain::entities::DeploymentCatalog;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{
    CompositeEventSink, JsonEventSink, PlannedTransfer, SystemToolRunner, TracingEventSink,
};

/// Event sink for the CLI.
///
/// Log lines always go to stderr; `--json` adds an NDJSON stream on stdout.
pub fn create_event_sink(json: bool, detailed: bool) -> Arc<dyn DeployEventSink> {
    let tracing: Arc<dyn DeployEventSink> = Arc::new(TracingEventSink::new(detailed));
    if json {
        Arc::new(CompositeEventSink::new(vec![
            tracing,
            Arc::new(JsonEventSink::stdout()),
        ]))
    } else {
        tracing
    }
}

pub fn deploy_options(settings: &Settings) -> DeployOptions {
    let mut options = DeployOptions::new(settings.build.output_dir.clone())
        .with_tool_timeout(settings.build.tool_timeout())
        .with_tools(settings.tools.clone());
    if let Some(dir) = &settings.build.workspace_dir {
        options = options.with_workspace_dir(dir.clone());
    }
    options
}

/// Create an orchestrator with the default strategies, the system tool
/// runner and the planned transporter
pub fn create_orchestrator(
    catalog: Arc<DeploymentCatalog>,
    settings: &Settings,
    events: Arc<dyn DeployEventSink>,
) -> DeploymentOrchestrator {
    DeploymentOrchestrator::new(
        catalog,
        Arc::new(StrategyRegistry::with_defaults()),
        deploy_options(settings),
        Arc::new(SystemToolRunner::new()),
        Arc::new(PlannedTransfer::new(events.clone())),
        events,
    )
}
