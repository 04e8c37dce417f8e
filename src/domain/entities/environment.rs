//! Environment configuration entity

use serde::{Deserialize, Serialize};

use super::OptionBag;

/// One deployment target as loaded from the environment catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(skip)]
    name: String,
    #[serde(rename = "type")]
    env_type: String,
    #[serde(default)]
    hosts: Vec<String>,
    #[serde(flatten)]
    options: OptionBag,
}

impl EnvironmentConfig {
    pub fn new(name: impl Into<String>, env_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            env_type: env_type.into(),
            hosts: Vec::new(),
            options: OptionBag::new(),
        }
    }

    pub fn with_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_options(mut self, options: OptionBag) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env_type(&self) -> &str {
        &self.env_type
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn options(&self) -> &OptionBag {
        &self.options
    }
}
