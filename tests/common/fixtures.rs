//! Test fixtures - catalog and settings content.

/// One Python application archived from `src/`
pub const PYTHON_TARBALL_APP: &str = r#"A:
  type: python
  source_dir: "{src}"
"#;

/// One Python application whose source directory does not exist
pub const MISSING_SOURCE_APP: &str = r#"A:
  type: python
  source_dir: "{src}/missing"
"#;

/// One VM environment with a single host
pub const SINGLE_HOST_VM: &str = r#"E:
  type: vm
  hosts:
    - h1
"#;

pub const MAIN_PY: &str = "print('hello')\n";
