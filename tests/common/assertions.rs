//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a path under the project root exists.
///
/// # Example
/// ```ignore
/// assert_exists!(env, "build/A/A-v1.tar.gz");
/// ```
#[macro_export]
macro_rules! assert_exists {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.exists(),
            "Expected '{}' to exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that a path under the project root does not exist.
#[macro_export]
macro_rules! assert_not_exists {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(!full_path.exists(), "Expected '{}' to NOT exist", $path);
    };
}

/// Assert that stdout or stderr contains a pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\nstdout:\n{}\nstderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
