//! Settings loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{DeployError, DeployResult};

use super::types::Settings;

pub const SETTINGS_FILE: &str = "deploykit.toml";
pub const ENV_OUTPUT_DIR: &str = "DEPLOYKIT_OUTPUT_DIR";
pub const ENV_TOOL_TIMEOUT: &str = "DEPLOYKIT_TOOL_TIMEOUT";
pub const ENV_WORKSPACE_DIR: &str = "DEPLOYKIT_WORKSPACE_DIR";

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| DeployError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load project settings, else user settings, else defaults; then apply
/// environment overrides.
///
/// A missing file falls through to the next layer. A file that exists but
/// does not parse is an error.
pub fn load_settings(config_dir: &Path) -> DeployResult<(Settings, Vec<ConfigWarning>)> {
    let candidates = std::iter::once(config_dir.join(SETTINGS_FILE)).chain(user_settings_path());

    for path in candidates {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading settings");
            let (settings, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(settings), warnings));
        }
    }

    Ok((with_env_overrides(Settings::default()), Vec::new()))
}

/// `$XDG_CONFIG_HOME/deploykit/deploykit.toml`, falling back to
/// `~/.config/deploykit/deploykit.toml`
pub fn user_settings_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("deploykit").join(SETTINGS_FILE))
}

/// Apply environment variable overrides (DEPLOYKIT_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    apply_env_overrides_from(settings, |name| std::env::var(name).ok())
}

/// Same as [`with_env_overrides`] with an explicit variable lookup
pub fn apply_env_overrides_from<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
        settings.build.output_dir = PathBuf::from(dir);
    }

    if let Some(dir) = lookup(ENV_WORKSPACE_DIR).filter(|v| !v.is_empty()) {
        settings.build.workspace_dir = Some(PathBuf::from(dir));
    }

    if let Some(raw) = lookup(ENV_TOOL_TIMEOUT) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => settings.build.tool_timeout_secs = Some(secs),
            Err(_) => tracing::warn!(
                variable = ENV_TOOL_TIMEOUT,
                value = %raw,
                "ignoring non-numeric tool timeout"
            ),
        }
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "output_dir",
        "workspace_dir",
        "tool_timeout_secs",
        "tools",
        "tar",
        "python",
        "perl",
        "make",
        "docker",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
