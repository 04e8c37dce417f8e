//! Build artifact entity

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::Version;

/// What a builder produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Gzip-compressed tar of the source tree
    Tarball,
    /// Python wheel
    Wheel,
    /// Perl source distribution
    Distribution,
    /// `docker save` output
    ImageArchive,
}

impl ArtifactKind {
    /// Suffix appended to `<name>-<version>` in the output directory
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Tarball | ArtifactKind::Distribution => ".tar.gz",
            ArtifactKind::Wheel => ".whl",
            ArtifactKind::ImageArchive => ".docker.tar",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Tarball => "tarball",
            ArtifactKind::Wheel => "wheel",
            ArtifactKind::Distribution => "distribution",
            ArtifactKind::ImageArchive => "image-archive",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<name>-<version><ext>`
pub fn artifact_file_name(app_name: &str, version: &Version, kind: ArtifactKind) -> String {
    format!("{}-{}{}", app_name, version, kind.extension())
}

/// A file in the output directory, ready to hand to a transporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    path: PathBuf,
    kind: ArtifactKind,
    size_bytes: u64,
    /// `sha256:<hex>`
    checksum: String,
}

impl Artifact {
    pub fn new(path: PathBuf, kind: ArtifactKind, size_bytes: u64, checksum: String) -> Self {
        Self {
            path,
            kind,
            size_bytes,
            checksum,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}
