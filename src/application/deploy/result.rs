//! Deploy Result
//!
//! Outcome of one pipeline run.

use std::time::Duration;

use crate::domain::entities::{Artifact, DeploymentRequest};
use crate::domain::value_objects::PipelinePhase;
use crate::error::{DeployError, ErrorKind};

/// What happened to a request.
///
/// On success `artifact` is set and `error` is not; on failure `error` holds
/// the typed cause and `failed_phase` the phase it occurred in.
#[derive(Debug)]
pub struct DeploymentReport {
    pub request: DeploymentRequest,
    pub phase: PipelinePhase,
    pub failed_phase: Option<PipelinePhase>,
    pub history: Vec<PipelinePhase>,
    pub artifact: Option<Artifact>,
    pub error: Option<DeployError>,
    pub elapsed: Duration,
}

impl DeploymentReport {
    pub fn is_success(&self) -> bool {
        self.phase == PipelinePhase::Succeeded && self.error.is_none()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(DeployError::kind)
    }
}
