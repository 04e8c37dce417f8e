//! Fan-out event sink

use std::sync::Arc;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Forwards every event to each inner sink, in order
pub struct CompositeEventSink {
    sinks: Vec<Arc<dyn DeployEventSink>>,
}

impl CompositeEventSink {
    pub fn new(sinks: Vec<Arc<dyn DeployEventSink>>) -> Self {
        Self { sinks }
    }
}

impl DeployEventSink for CompositeEventSink {
    fn on_event(&self, event: DeployEvent) {
        for sink in &self.sinks {
            sink.on_event(event.clone());
        }
    }

    /// Detailed events are produced if any inner sink wants them
    fn wants_detailed_events(&self) -> bool {
        self.sinks.iter().any(|s| s.wants_detailed_events())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopEventSink;
    use crate::domain::value_objects::PipelinePhase;
    use crate::testing::RecordingEventSink;

    #[test]
    fn every_sink_sees_every_event() {
        let a = Arc::new(RecordingEventSink::new());
        let b = Arc::new(RecordingEventSink::new());
        let sink = CompositeEventSink::new(vec![a.clone(), b.clone()]);

        sink.on_event(DeployEvent::PhaseEntered {
            phase: PipelinePhase::Validating,
        });

        assert_eq!(a.events().len(), 1);
        assert_eq!(b.events().len(), 1);
    }

    #[test]
    fn detail_preference_is_any() {
        let quiet = CompositeEventSink::new(vec![Arc::new(NoopEventSink)]);
        assert!(!quiet.wants_detailed_events());

        let mixed = CompositeEventSink::new(vec![
            Arc::new(NoopEventSink),
            Arc::new(RecordingEventSink::new()),
        ]);
        assert!(mixed.wants_detailed_events());
    }
}
