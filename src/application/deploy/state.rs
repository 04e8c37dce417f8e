//! Phase tracking for one run

use crate::domain::value_objects::PipelinePhase;
use crate::error::{DeployError, DeployResult};

/// Current phase plus every phase visited, in order
#[derive(Debug, Clone)]
pub struct PipelineState {
    phase: PipelinePhase,
    history: Vec<PipelinePhase>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self {
            phase: PipelinePhase::Initialized,
            history: vec![PipelinePhase::Initialized],
        }
    }

    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    pub fn history(&self) -> &[PipelinePhase] {
        &self.history
    }

    /// Move to `next`, rejecting moves the state machine does not allow
    pub fn transition_to(&mut self, next: PipelinePhase) -> DeployResult<()> {
        if !self.phase.can_transition_to(next) {
            return Err(DeployError::Internal(format!(
                "invalid phase transition {} -> {}",
                self.phase, next
            )));
        }
        self.phase = next;
        self.history.push(next);
        Ok(())
    }

    /// Enter `Failed` from any non-terminal phase. Returns the phase that failed.
    pub fn fail(&mut self) -> PipelinePhase {
        let failed_in = self.phase;
        if !self.phase.is_terminal() {
            self.phase = PipelinePhase::Failed;
            self.history.push(PipelinePhase::Failed);
        }
        failed_in
    }

    pub fn into_history(self) -> Vec<PipelinePhase> {
        self.history
    }
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}
