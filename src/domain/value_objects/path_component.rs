//! Rules for names that become a single path component

/// Checks that `raw` can be joined onto a directory without leaving it.
///
/// Returns the broken rule on failure. Application names, environment names
/// and versions all end up in output paths or image tags.
pub fn check_path_component(raw: &str) -> Result<(), &'static str> {
    if raw.is_empty() {
        return Err("must not be empty");
    }
    if raw.contains(['/', '\\']) {
        return Err("must not contain path separators");
    }
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("must not contain whitespace");
    }
    if raw == "." || raw == ".." {
        return Err("must not be a relative path component");
    }
    Ok(())
}
