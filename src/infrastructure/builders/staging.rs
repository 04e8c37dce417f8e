//! Copying a source tree into a build workspace

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;

use crate::error::BuildError;

/// Copy every entry under `source` into `dest`.
///
/// Nothing is filtered: hidden files, ignore files and VCS directories are
/// copied like anything else. Symlinks are recreated, not followed.
pub fn stage_tree(source: &Path, dest: &Path) -> Result<usize, BuildError> {
    let staging_error = |message: String| BuildError::Staging {
        source_dir: source.to_path_buf(),
        message,
    };

    fs::create_dir_all(dest).map_err(|e| BuildError::io(dest, e))?;

    let walker = WalkBuilder::new(source)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| staging_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| staging_error(e.to_string()))?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let target = dest.join(relative);
        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| BuildError::io(&target, e))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            copied += 1;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| BuildError::io(&target, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> Result<(), BuildError> {
    let points_to = fs::read_link(link).map_err(|e| BuildError::io(link, e))?;
    std::os::unix::fs::symlink(&points_to, target).map_err(|e| BuildError::io(target, e))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> Result<(), BuildError> {
    if link.is_dir() {
        return Ok(());
    }
    fs::copy(link, target)
        .map(|_| ())
        .map_err(|e| BuildError::io(target, e))
}
