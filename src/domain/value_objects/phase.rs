//! Pipeline phase state machine

use serde::{Deserialize, Serialize};

/// Discrete states of one deployment run.
///
/// The orchestrator moves through these strictly in order; any phase may
/// fall into `Failed`, and both terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelinePhase {
    /// Request accepted, nothing resolved yet
    Initialized,
    /// Source tree is being checked
    Validating,
    /// Artifact is being produced
    Packaging,
    /// Target environment is being prepared and the artifact handed off
    Deploying,
    /// Every phase completed
    Succeeded,
    /// A phase failed; nothing after it ran
    Failed,
}

impl PipelinePhase {
    /// Get the human-readable name for this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelinePhase::Initialized => "initialized",
            PipelinePhase::Validating => "validating",
            PipelinePhase::Packaging => "packaging",
            PipelinePhase::Deploying => "deploying",
            PipelinePhase::Succeeded => "succeeded",
            PipelinePhase::Failed => "failed",
        }
    }

    /// Get all valid phase transitions FROM this phase.
    pub fn valid_next_phases(&self) -> &'static [PipelinePhase] {
        match self {
            PipelinePhase::Initialized => &[PipelinePhase::Validating, PipelinePhase::Failed],
            PipelinePhase::Validating => &[PipelinePhase::Packaging, PipelinePhase::Failed],
            PipelinePhase::Packaging => &[PipelinePhase::Deploying, PipelinePhase::Failed],
            PipelinePhase::Deploying => &[PipelinePhase::Succeeded, PipelinePhase::Failed],
            PipelinePhase::Succeeded | PipelinePhase::Failed => &[],
        }
    }

    /// Check if a transition to the given phase is valid.
    pub fn can_transition_to(&self, next: PipelinePhase) -> bool {
        self.valid_next_phases().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelinePhase::Succeeded | PipelinePhase::Failed)
    }
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        assert!(PipelinePhase::Initialized.can_transition_to(PipelinePhase::Validating));
        assert!(PipelinePhase::Validating.can_transition_to(PipelinePhase::Packaging));
        assert!(PipelinePhase::Packaging.can_transition_to(PipelinePhase::Deploying));
        assert!(PipelinePhase::Deploying.can_transition_to(PipelinePhase::Succeeded));
    }

    #[test]
    fn phases_cannot_be_skipped() {
        assert!(!PipelinePhase::Initialized.can_transition_to(PipelinePhase::Packaging));
        assert!(!PipelinePhase::Validating.can_transition_to(PipelinePhase::Deploying));
        assert!(!PipelinePhase::Packaging.can_transition_to(PipelinePhase::Succeeded));
    }

    #[test]
    fn every_running_phase_can_fail() {
        for phase in [
            PipelinePhase::Initialized,
            PipelinePhase::Validating,
            PipelinePhase::Packaging,
            PipelinePhase::Deploying,
        ] {
            assert!(phase.can_transition_to(PipelinePhase::Failed), "{phase}");
        }
    }

    #[test]
    fn terminal_phases_are_final() {
        assert!(PipelinePhase::Succeeded.valid_next_phases().is_empty());
        assert!(PipelinePhase::Failed.valid_next_phases().is_empty());
        assert!(PipelinePhase::Failed.is_terminal());
        assert!(!PipelinePhase::Deploying.is_terminal());
    }
}
