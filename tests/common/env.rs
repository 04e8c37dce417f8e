//! Test environment builder for isolated deploykit runs.
//!
//! Provides `TestEnv` - a temp project directory plus a separate fake home,
//! and helpers to run the deploykit binary inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the deploykit binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid JSON line {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated sandbox: `project_root` is the working directory, `home_dir`
/// stands in for `$HOME`.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }

    pub fn write_home_file(&self, relative: &str, content: &str) {
        write_file(&self.home_path(relative), content);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run from the project root with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("DEPLOYKIT_OUTPUT_DIR")
            .env_remove("DEPLOYKIT_TOOL_TIMEOUT")
            .env_remove("DEPLOYKIT_WORKSPACE_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute deploykit");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create directories");
    }
    std::fs::write(path, content).expect("failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    apps: Option<String>,
    environments: Option<String>,
    settings: Option<String>,
    source_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// `config/apps.yaml`; `{src}` is replaced by the absolute `src/` path
    pub fn with_apps(mut self, yaml: &str) -> Self {
        self.apps = Some(yaml.to_string());
        self
    }

    pub fn with_environments(mut self, yaml: &str) -> Self {
        self.environments = Some(yaml.to_string());
        self
    }

    /// `config/deploykit.toml`
    pub fn with_settings(mut self, toml: &str) -> Self {
        self.settings = Some(toml.to_string());
        self
    }

    /// A file under `src/`
    pub fn with_source_file(mut self, relative: &str, content: &str) -> Self {
        self.source_files
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("failed to create project dir"),
            home_dir: TempDir::new().expect("failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deploykit")),
        };

        std::fs::create_dir_all(env.project_path("src")).expect("failed to create src");
        for (relative, content) in &self.source_files {
            env.write_project_file(&format!("src/{relative}"), content);
        }

        let src = env.project_path("src");
        let src = src.to_string_lossy();
        if let Some(apps) = &self.apps {
            env.write_project_file("config/apps.yaml", &apps.replace("{src}", &src));
        }
        if let Some(environments) = &self.environments {
            env.write_project_file("config/environments.yaml", environments);
        }
        if let Some(settings) = &self.settings {
            env.write_project_file("config/deploykit.toml", settings);
        }
        env
    }
}
