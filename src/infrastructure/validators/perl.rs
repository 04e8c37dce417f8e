//! Perl source validation

use std::sync::Arc;

use super::{entry_point_present, existing_source_dir};
use crate::domain::entities::ApplicationConfig;
use crate::domain::ports::{DeployEventSink, EventLevel, SourceValidator};
use crate::error::DeployResult;

pub struct PerlValidator {
    events: Arc<dyn DeployEventSink>,
}

impl PerlValidator {
    pub fn new(events: Arc<dyn DeployEventSink>) -> Self {
        Self { events }
    }
}

impl SourceValidator for PerlValidator {
    fn name(&self) -> &str {
        "perl-validator"
    }

    fn validate(&self, app: &ApplicationConfig) -> DeployResult<bool> {
        self.events.diagnostic(
            EventLevel::Info,
            self.name(),
            format!("validating Perl application: {}", app.name()),
        );
        let Some(source_dir) = existing_source_dir(app, self.events.as_ref(), self.name())? else {
            return Ok(false);
        };

        // Without an entry point, modules under lib/ are the usual layout.
        if !app.options().contains_key("entry_point") && !source_dir.join("lib").is_dir() {
            self.events.diagnostic(
                EventLevel::Warn,
                self.name(),
                format!("no lib/ directory in {}", source_dir.display()),
            );
        }

        Ok(entry_point_present(
            app,
            source_dir,
            self.events.as_ref(),
            self.name(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DeployEvent;
    use crate::testing::RecordingEventSink;
    use tempfile::tempdir;

    fn warnings(events: &RecordingEventSink) -> usize {
        events
            .events()
            .iter()
            .filter(|e| matches!(e, DeployEvent::Diagnostic { level: EventLevel::Warn, .. }))
            .count()
    }

    #[test]
    fn missing_lib_is_only_a_warning() {
        let dir = tempdir().unwrap();
        let events = Arc::new(RecordingEventSink::new());
        let app = ApplicationConfig::new("api", "perl").with_source_dir(dir.path());

        assert!(PerlValidator::new(events.clone()).validate(&app).unwrap());
        assert_eq!(warnings(&events), 1);
    }

    #[test]
    fn lib_directory_silences_the_warning() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        let events = Arc::new(RecordingEventSink::new());
        let app = ApplicationConfig::new("api", "perl").with_source_dir(dir.path());

        assert!(PerlValidator::new(events.clone()).validate(&app).unwrap());
        assert_eq!(warnings(&events), 0);
    }

    #[test]
    fn missing_directory_is_invalid() {
        let dir = tempdir().unwrap();
        let app = ApplicationConfig::new("api", "perl").with_source_dir(dir.path().join("nope"));
        let validator = PerlValidator::new(Arc::new(RecordingEventSink::new()));
        assert!(!validator.validate(&app).unwrap());
    }
}
