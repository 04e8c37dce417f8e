//! Test doubles shared by unit tests

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{
    BuildContext, DeployEvent, DeployEventSink, ToolError, ToolInvocation, ToolOutput, ToolRunner,
};
use crate::domain::value_objects::ToolCommands;

/// Keeps every event for later inspection
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DeployEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DeployEventSink for RecordingEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}

enum Behavior {
    /// Write bytes to the argument following `flag`
    FileAfter { flag: String, bytes: Vec<u8> },
    /// Write bytes to `cwd/rel` when `program` runs
    InCwd {
        program: String,
        rel: PathBuf,
        bytes: Vec<u8>,
    },
}

/// Non-zero exit for `program`, optionally only for one subcommand
struct Failure {
    program: String,
    subcommand: Option<String>,
    code: i32,
    stderr: String,
}

impl Failure {
    fn matches(&self, invocation: &ToolInvocation) -> bool {
        self.program == invocation.program()
            && self.subcommand.as_deref().map_or(true, |sub| {
                invocation.arguments().first().map(String::as_str) == Some(sub)
            })
    }
}

/// Records invocations and simulates the files real tools would leave behind
#[derive(Default)]
pub struct FakeToolRunner {
    behaviors: Vec<Behavior>,
    failures: Vec<Failure>,
    panics: Vec<String>,
    calls: Mutex<Vec<ToolInvocation>>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn creating_file_after(mut self, flag: &str, bytes: &[u8]) -> Self {
        self.behaviors.push(Behavior::FileAfter {
            flag: flag.to_string(),
            bytes: bytes.to_vec(),
        });
        self
    }

    pub fn creating_in_cwd(mut self, program: &str, rel: &str, bytes: &[u8]) -> Self {
        self.behaviors.push(Behavior::InCwd {
            program: program.to_string(),
            rel: PathBuf::from(rel),
            bytes: bytes.to_vec(),
        });
        self
    }

    /// Every run of `program` exits with `code`. Files are still written
    /// first, like a tool that dies part-way through its output.
    pub fn failing(mut self, program: &str, code: i32, stderr: &str) -> Self {
        self.failures.push(Failure {
            program: program.to_string(),
            subcommand: None,
            code,
            stderr: stderr.to_string(),
        });
        self
    }

    /// Runs of `program` whose first argument is `subcommand` exit with `code`
    pub fn failing_subcommand(
        mut self,
        program: &str,
        subcommand: &str,
        code: i32,
        stderr: &str,
    ) -> Self {
        self.failures.push(Failure {
            program: program.to_string(),
            subcommand: Some(subcommand.to_string()),
            code,
            stderr: stderr.to_string(),
        });
        self
    }

    pub fn panicking(mut self, program: &str) -> Self {
        self.panics.push(program.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, ToolError> {
        self.calls.lock().unwrap().push(invocation.clone());
        let program = invocation.program();

        if self.panics.iter().any(|p| p == program) {
            panic!("{} exploded", program);
        }
        let args = invocation.arguments();
        for behavior in &self.behaviors {
            match behavior {
                Behavior::FileAfter { flag, bytes } => {
                    if let Some(pos) = args.iter().position(|a| a == flag) {
                        if let Some(target) = args.get(pos + 1) {
                            write_file(Path::new(target), bytes);
                        }
                    }
                }
                Behavior::InCwd {
                    program: p,
                    rel,
                    bytes,
                } if p == program => write_file(&invocation.cwd().join(rel), bytes),
                Behavior::InCwd { .. } => {}
            }
        }

        if let Some(failure) = self.failures.iter().find(|f| f.matches(invocation)) {
            return Ok(ToolOutput {
                status: Some(failure.code),
                stdout: String::new(),
                stderr: failure.stderr.clone(),
            });
        }

        Ok(ToolOutput {
            status: Some(0),
            ..Default::default()
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}

/// Build context writing into `output_dir` with default tool names
pub fn test_build_context<R: ToolRunner + 'static>(
    output_dir: &Path,
    runner: Arc<R>,
) -> BuildContext {
    BuildContext {
        output_dir: output_dir.to_path_buf(),
        workspace_parent: None,
        tools: ToolCommands::default(),
        tool_timeout: None,
        runner,
        events: Arc::new(RecordingEventSink::new()),
    }
}
