//! Artifact fingerprinting

use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::domain::entities::{Artifact, ArtifactKind};
use crate::error::BuildError;

/// `sha256:<hex>` of the file's bytes, streamed
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("sha256:{:x}", hasher.finalize()))
}

/// Build the [`Artifact`] record for a file a builder just produced
pub fn describe_artifact(path: &Path, kind: ArtifactKind) -> Result<Artifact, BuildError> {
    let metadata = std::fs::metadata(path).map_err(|e| BuildError::io(path, e))?;
    let checksum = sha256_file(path).map_err(|e| BuildError::io(path, e))?;
    Ok(Artifact::new(
        path.to_path_buf(),
        kind,
        metadata.len(),
        checksum,
    ))
}
