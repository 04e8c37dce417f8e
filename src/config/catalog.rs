//! Catalog loading from YAML

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::entities::{ApplicationConfig, DeploymentCatalog, EnvironmentConfig};
use crate::domain::value_objects::check_path_component;
use crate::error::{DeployError, DeployResult};

pub const APPS_FILE: &str = "apps.yaml";
pub const ENVIRONMENTS_FILE: &str = "environments.yaml";

/// Load both catalogs from `config_dir`.
///
/// Each file maps a name to its entry. Both files must exist; an empty file
/// is an empty catalog. Names become output path components, so a name that
/// could leave the output root is rejected.
pub fn load_catalog(config_dir: &Path) -> DeployResult<DeploymentCatalog> {
    let apps: BTreeMap<String, ApplicationConfig> =
        load_map(&config_dir.join(APPS_FILE), "application")?;
    let environments: BTreeMap<String, EnvironmentConfig> =
        load_map(&config_dir.join(ENVIRONMENTS_FILE), "environment")?;

    tracing::debug!(
        applications = apps.len(),
        environments = environments.len(),
        dir = %config_dir.display(),
        "catalog loaded"
    );

    let catalog = apps
        .into_iter()
        .fold(DeploymentCatalog::new(), |catalog, (name, app)| {
            catalog.with_application(name, app)
        });
    Ok(environments
        .into_iter()
        .fold(catalog, |catalog, (name, env)| {
            catalog.with_environment(name, env)
        }))
}

fn load_map<T: DeserializeOwned>(
    path: &Path,
    what: &str,
) -> DeployResult<BTreeMap<String, T>> {
    let content = fs::read_to_string(path).map_err(|source| DeployError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let parsed: Option<BTreeMap<String, T>> =
        serde_yaml_ng::from_str(&content).map_err(|e| DeployError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let map = parsed.unwrap_or_default();

    for name in map.keys() {
        check_path_component(name).map_err(|reason| DeployError::InvalidConfig {
            file: path.to_path_buf(),
            message: format!("{what} name '{name}' {reason}"),
        })?;
    }
    Ok(map)
}
