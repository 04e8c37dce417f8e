//! Packaging mode value object - selects the artifact-production algorithm

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeployError;

/// How an application is turned into an artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageMode {
    /// Compressed archive of the whole source tree
    #[default]
    Tarball,
    /// The language's native package format (wheel, CPAN distribution)
    Wheel,
    /// Container image exported to a single tar file
    Docker,
}

impl PackageMode {
    pub const ALL: [PackageMode; 3] = [PackageMode::Tarball, PackageMode::Wheel, PackageMode::Docker];

    /// Configuration spelling of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageMode::Tarball => "tarball",
            PackageMode::Wheel => "wheel",
            PackageMode::Docker => "docker",
        }
    }

    /// Suffix used when naming builder implementations (`python-archive`, ...)
    pub fn strategy_suffix(&self) -> &'static str {
        match self {
            PackageMode::Tarball => "archive",
            PackageMode::Wheel => "package",
            PackageMode::Docker => "container",
        }
    }
}

impl FromStr for PackageMode {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tarball" | "archive" | "tar" | "tar.gz" => Ok(PackageMode::Tarball),
            "wheel" | "package" | "dist" => Ok(PackageMode::Wheel),
            "docker" | "container" | "image" => Ok(PackageMode::Docker),
            _ => Err(DeployError::UnknownPackageType {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PackageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
