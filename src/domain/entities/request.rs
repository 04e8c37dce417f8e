//! A single invocation of the pipeline

use serde::Serialize;

use crate::domain::value_objects::Version;

/// Which application goes where, under what version.
///
/// The version is fixed at construction; a request without an explicit
/// version is stamped with the local time once and keeps that stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRequest {
    app: String,
    environment: String,
    version: Version,
    test_mode: bool,
}

impl DeploymentRequest {
    pub fn new(app: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            environment: environment.into(),
            version: Version::now(),
            test_mode: false,
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }
}
