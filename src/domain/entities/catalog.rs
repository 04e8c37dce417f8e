//! The loaded set of applications and environments

use std::collections::BTreeMap;

use super::{ApplicationConfig, EnvironmentConfig};
use crate::error::{DeployError, DeployResult};

/// Applications and environments addressable by exact, case-sensitive name.
///
/// Immutable once built; the orchestrator shares it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct DeploymentCatalog {
    applications: BTreeMap<String, ApplicationConfig>,
    environments: BTreeMap<String, EnvironmentConfig>,
}

impl DeploymentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an application under `name`, replacing any earlier entry
    pub fn with_application(mut self, name: impl Into<String>, app: ApplicationConfig) -> Self {
        let name = name.into();
        self.applications.insert(name.clone(), app.named(name));
        self
    }

    pub fn with_environment(mut self, name: impl Into<String>, env: EnvironmentConfig) -> Self {
        let name = name.into();
        self.environments.insert(name.clone(), env.named(name));
        self
    }

    pub fn application(&self, name: &str) -> DeployResult<&ApplicationConfig> {
        self.applications
            .get(name)
            .ok_or_else(|| DeployError::ApplicationNotFound {
                name: name.to_string(),
            })
    }

    pub fn environment(&self, name: &str) -> DeployResult<&EnvironmentConfig> {
        self.environments
            .get(name)
            .ok_or_else(|| DeployError::EnvironmentNotFound {
                name: name.to_string(),
            })
    }

    pub fn application_names(&self) -> impl Iterator<Item = &str> {
        self.applications.keys().map(String::as_str)
    }

    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }
}
