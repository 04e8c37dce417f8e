//! Application configuration entity

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::OptionBag;
use crate::domain::value_objects::PackageMode;
use crate::error::{DeployError, DeployResult};

/// One deployable application as loaded from the application catalog.
///
/// `name` and `type` are fixed once loaded; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Catalog key; filled in by the catalog, not read from the entry body
    #[serde(skip)]
    name: String,
    #[serde(rename = "type")]
    app_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    package_type: Option<String>,
    #[serde(flatten)]
    options: OptionBag,
}

impl ApplicationConfig {
    pub fn new(name: impl Into<String>, app_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app_type: app_type.into(),
            source_dir: None,
            package_type: None,
            options: OptionBag::new(),
        }
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    pub fn with_package_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = Some(package_type.into());
        self
    }

    pub fn with_options(mut self, options: OptionBag) -> Self {
        self.options = options;
        self
    }

    /// Attach the catalog key. Only the catalog names entries.
    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_type(&self) -> &str {
        &self.app_type
    }

    pub fn source_dir(&self) -> Option<&Path> {
        self.source_dir.as_deref()
    }

    /// Source directory, or a configuration error when the key is absent
    pub fn require_source_dir(&self) -> DeployResult<&Path> {
        self.source_dir().ok_or_else(|| DeployError::MissingConfigKey {
            key: "source_dir".to_string(),
            owner: format!("application '{}'", self.name),
        })
    }

    /// String-list option such as `docker_commands`; a wrongly typed value
    /// is a configuration error
    pub fn string_list_option(&self, key: &str) -> DeployResult<Vec<String>> {
        self.options
            .get_string_list(key)
            .map_err(|message| DeployError::InvalidOption {
                key: key.to_string(),
                owner: format!("application '{}'", self.name),
                message,
            })
    }

    pub fn package_type(&self) -> Option<&str> {
        self.package_type.as_deref()
    }

    /// Packaging mode selected by `package_type` (tarball when unset)
    pub fn package_mode(&self) -> DeployResult<PackageMode> {
        match self.package_type() {
            None => Ok(PackageMode::default()),
            Some(raw) => raw.parse(),
        }
    }

    pub fn options(&self) -> &OptionBag {
        &self.options
    }
}
