//! Configuration module for deploykit
//!
//! Two kinds of input:
//!
//! - Catalogs: `apps.yaml` and `environments.yaml` in the config directory,
//!   loaded whole into a [`DeploymentCatalog`](crate::domain::entities::DeploymentCatalog)
//! - Settings: build and tool options, layered as
//!   1. CLI flags (highest priority)
//!   2. Environment variables (DEPLOYKIT_*)
//!   3. Project settings (`<config-dir>/deploykit.toml`)
//!   4. User settings (`~/.config/deploykit/deploykit.toml`)
//!   5. Built-in defaults (lowest priority)

mod catalog;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use catalog::{load_catalog, APPS_FILE, ENVIRONMENTS_FILE};
pub use loader::{
    apply_env_overrides_from, load_settings, load_with_warnings, user_settings_path,
    with_env_overrides, ENV_OUTPUT_DIR, ENV_TOOL_TIMEOUT, ENV_WORKSPACE_DIR, SETTINGS_FILE,
};
pub use types::{BuildSettings, Settings};
