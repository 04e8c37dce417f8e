//! Deployment Orchestrator
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the application and environment, instantiate strategies
//! 2. Validate the source tree
//! 3. Ensure the output directory and build the artifact
//! 4. Prepare the environment and hand the artifact to the transporter
//!
//! Each step is a hard stop on failure. Errors and panics never escape
//! [`DeploymentOrchestrator::run`]; they end up in the report.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::{Artifact, DeploymentCatalog, DeploymentRequest};
use crate::domain::ports::{
    BuildContext, DeliveryOptions, DeployEvent, DeployEventSink, EventLevel, ToolRunner,
    Transporter,
};
use crate::domain::value_objects::{check_path_component, PipelinePhase};
use crate::error::{BuildError, DeployError, DeployResult};
use crate::infrastructure::fs::OutputLayout;

use super::cancel::CancellationFlag;
use super::options::DeployOptions;
use super::result::DeploymentReport;
use super::state::PipelineState;
use crate::application::registry::StrategyRegistry;

/// Runs one request through validate, package and deploy.
///
/// Consumed by [`run`](Self::run); build a fresh orchestrator per request.
pub struct DeploymentOrchestrator {
    catalog: Arc<DeploymentCatalog>,
    registry: Arc<StrategyRegistry>,
    options: DeployOptions,
    runner: Arc<dyn ToolRunner>,
    transporter: Arc<dyn Transporter>,
    events: Arc<dyn DeployEventSink>,
    cancel: CancellationFlag,
}

impl DeploymentOrchestrator {
    pub fn new(
        catalog: Arc<DeploymentCatalog>,
        registry: Arc<StrategyRegistry>,
        options: DeployOptions,
        runner: Arc<dyn ToolRunner>,
        transporter: Arc<dyn Transporter>,
        events: Arc<dyn DeployEventSink>,
    ) -> Self {
        Self {
            catalog,
            registry,
            options,
            runner,
            transporter,
            events,
            cancel: CancellationFlag::new(),
        }
    }

    /// Share a cancellation flag with the caller (e.g. a Ctrl-C handler)
    pub fn with_cancellation(mut self, cancel: CancellationFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Execute the pipeline for `request`
    pub fn run(self, request: &DeploymentRequest) -> DeploymentReport {
        let started = Instant::now();
        let mut state = PipelineState::new();

        self.events.on_event(DeployEvent::Started {
            app: request.app().to_string(),
            environment: request.environment().to_string(),
            version: request.version().to_string(),
            test_mode: request.test_mode(),
        });

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.execute(request, &mut state)))
            .unwrap_or_else(|payload| Err(DeployError::Internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(artifact) => {
                self.events.on_event(DeployEvent::Completed {
                    artifact: artifact.path().to_path_buf(),
                    elapsed_ms: started.elapsed().as_millis(),
                });
                DeploymentReport {
                    request: request.clone(),
                    phase: state.phase(),
                    failed_phase: None,
                    history: state.into_history(),
                    artifact: Some(artifact),
                    error: None,
                    elapsed: started.elapsed(),
                }
            }
            Err(error) => {
                let failed_in = state.fail();
                self.events.on_event(DeployEvent::Failed {
                    phase: failed_in,
                    kind: error.kind(),
                    error: error.detailed(),
                });
                DeploymentReport {
                    request: request.clone(),
                    phase: state.phase(),
                    failed_phase: Some(failed_in),
                    history: state.into_history(),
                    artifact: None,
                    error: Some(error),
                    elapsed: started.elapsed(),
                }
            }
        }
    }

    fn execute(
        &self,
        request: &DeploymentRequest,
        state: &mut PipelineState,
    ) -> DeployResult<Artifact> {
        // Resolution: no filesystem side effects until this succeeds.
        let app = self.catalog.application(request.app())?;
        let env = self.catalog.environment(request.environment())?;
        check_name("application", app.name())?;
        check_name("environment", env.name())?;
        let layout = OutputLayout::new(&self.options.output_root);

        let validator = self.registry.validator_for(app, self.events.clone())?;
        let builder = self.registry.builder_for(
            app,
            BuildContext {
                output_dir: layout.app_dir(app.name()),
                workspace_parent: self.options.workspace_dir.clone(),
                tools: self.options.tools.clone(),
                tool_timeout: self.options.tool_timeout,
                runner: self.runner.clone(),
                events: self.events.clone(),
            },
        )?;
        let preparer = self.registry.preparer_for(env, self.events.clone());

        self.enter(state, PipelinePhase::Validating)?;
        self.events.diagnostic(
            EventLevel::Debug,
            validator.name(),
            format!("validating source of '{}'", app.name()),
        );
        if !validator.validate(app)? {
            return Err(DeployError::ValidationFailed {
                app: app.name().to_string(),
            });
        }

        self.enter(state, PipelinePhase::Packaging)?;
        let output_dir = layout
            .ensure_app_dir(app.name())
            .map_err(|source| BuildError::io(layout.app_dir(app.name()), source))?;
        self.events.diagnostic(
            EventLevel::Debug,
            builder.name(),
            format!("building into {}", output_dir.display()),
        );
        let artifact = builder.build(app, request.version())?;
        self.events.on_event(DeployEvent::ArtifactBuilt {
            path: artifact.path().to_path_buf(),
            kind: artifact.kind(),
            size_bytes: artifact.size_bytes(),
            checksum: artifact.checksum().to_string(),
        });

        self.enter(state, PipelinePhase::Deploying)?;
        preparer.prepare(env)?;
        let delivered = self.transporter.deliver(
            &artifact,
            env,
            &DeliveryOptions {
                test_mode: request.test_mode(),
            },
        )?;
        if !delivered {
            return Err(DeployError::TransferDeclined {
                transporter: self.transporter.name().to_string(),
                artifact: artifact.path().to_path_buf(),
            });
        }

        state.transition_to(PipelinePhase::Succeeded)?;
        self.events.on_event(DeployEvent::PhaseEntered {
            phase: PipelinePhase::Succeeded,
        });
        Ok(artifact)
    }

    /// Check for cancellation, then move to `phase`
    fn enter(&self, state: &mut PipelineState, phase: PipelinePhase) -> DeployResult<()> {
        if self.cancel.is_cancelled() {
            return Err(DeployError::Cancelled {
                phase: phase.to_string(),
            });
        }
        state.transition_to(phase)?;
        self.events.on_event(DeployEvent::PhaseEntered { phase });
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("panic during deployment: {}", detail)
}

/// Catalogs built in code skip the loader, so names are checked again here
fn check_name(what: &'static str, name: &str) -> DeployResult<()> {
    check_path_component(name).map_err(|reason| DeployError::InvalidName {
        what,
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
