//! Choosing the one package a language tool produced

use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Pick the single artifact among `candidates`.
///
/// Zero candidates is [`BuildError::NoArtifact`]; more than one is
/// [`BuildError::AmbiguousArtifact`] listing every candidate in sorted order.
pub fn select_single(
    mut candidates: Vec<PathBuf>,
    suffix: &str,
    dir: &Path,
) -> Result<PathBuf, BuildError> {
    candidates.sort();
    match candidates.len() {
        0 => Err(BuildError::NoArtifact {
            suffix: suffix.to_string(),
            dir: dir.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(BuildError::AmbiguousArtifact {
            suffix: suffix.to_string(),
            candidates,
        }),
    }
}
