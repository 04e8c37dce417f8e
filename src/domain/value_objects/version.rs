//! Deployment version value object

use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use super::check_path_component;
use crate::error::DeployError;

/// `chrono` format of generated versions (`YYYYMMDD.HHMMSS`)
pub const VERSION_TIMESTAMP_FORMAT: &str = "%Y%m%d.%H%M%S";

/// Version label stamped on every artifact of one deployment.
///
/// Either supplied by the caller or generated from the wall clock. The value
/// ends up in file names and image tags, so path separators, whitespace and
/// control characters are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(String);

impl Version {
    /// Validate a caller-supplied version
    pub fn parse(raw: &str) -> Result<Self, DeployError> {
        check_path_component(raw).map_err(|reason| DeployError::InvalidVersion {
            version: raw.to_string(),
            reason: format!("version {reason}"),
        })?;

        Ok(Self(raw.to_string()))
    }

    /// Generate a version from the current local time
    pub fn now() -> Self {
        Self::from_timestamp(&Local::now())
    }

    /// Generate a version from a timestamp
    pub fn from_timestamp<Tz>(timestamp: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self(timestamp.format(VERSION_TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Version {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = DeployError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
