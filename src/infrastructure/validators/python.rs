//! Python source validation

use std::sync::Arc;

use super::{entry_point_present, existing_source_dir};
use crate::domain::entities::ApplicationConfig;
use crate::domain::ports::{DeployEventSink, EventLevel, SourceValidator};
use crate::error::DeployResult;

pub struct PythonValidator {
    events: Arc<dyn DeployEventSink>,
}

impl PythonValidator {
    pub fn new(events: Arc<dyn DeployEventSink>) -> Self {
        Self { events }
    }
}

impl SourceValidator for PythonValidator {
    fn name(&self) -> &str {
        "python-validator"
    }

    fn validate(&self, app: &ApplicationConfig) -> DeployResult<bool> {
        self.events.diagnostic(
            EventLevel::Info,
            self.name(),
            format!("validating Python application: {}", app.name()),
        );
        let Some(source_dir) = existing_source_dir(app, self.events.as_ref(), self.name())? else {
            return Ok(false);
        };
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
    use crate::error::DeployError;
    use crate::testing::RecordingEventSink;
    use tempfile::tempdir;

    #[test]
    fn existing_directory_is_valid() {
        let dir = tempdir().unwrap();
        let app = ApplicationConfig::new("web", "python").with_source_dir(dir.path());
        let validator = PythonValidator::new(Arc::new(RecordingEventSink::new()));
        assert!(validator.validate(&app).unwrap());
    }

    #[test]
    fn missing_directory_is_invalid_not_an_error() {
        let dir = tempdir().unwrap();
        let events = Arc::new(RecordingEventSink::new());
        let app = ApplicationConfig::new("web", "python").with_source_dir(dir.path().join("gone"));
        let validator = PythonValidator::new(events.clone());

        assert!(!validator.validate(&app).unwrap());
        assert!(events.events().iter().any(|e| matches!(
            e,
            DeployEvent::Diagnostic { level: EventLevel::Error, message, .. }
                if message.starts_with("source directory not found")
        )));
    }

    #[test]
    fn missing_source_dir_key_fails_loudly() {
        let app = ApplicationConfig::new("web", "python");
        let validator = PythonValidator::new(Arc::new(RecordingEventSink::new()));
        assert!(matches!(
            validator.validate(&app),
            Err(DeployError::MissingConfigKey { .. })
        ));
    }

    #[test]
    fn configured_entry_point_must_exist() {
        let dir = tempdir().unwrap();
        let options = crate::domain::entities::OptionBag::new().with("entry_point", "app.py");
        let app = ApplicationConfig::new("web", "python")
            .with_source_dir(dir.path())
            .with_options(options);
        let validator = PythonValidator::new(Arc::new(RecordingEventSink::new()));

        assert!(!validator.validate(&app).unwrap());
        std::fs::write(dir.path().join("app.py"), "print('hi')\n").unwrap();
        assert!(validator.validate(&app).unwrap());
    }
}
