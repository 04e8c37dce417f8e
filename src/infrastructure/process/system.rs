//! Tool runner backed by `std::process::Command`

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::domain::ports::{ToolError, ToolInvocation, ToolOutput, ToolRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs tools synchronously, capturing stdout and stderr.
///
/// Without a time limit the call blocks until the tool exits. With one, the
/// child is polled and killed once the limit passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &ToolInvocation) -> Command {
        let mut command = Command::new(invocation.program());
        command
            .args(invocation.arguments())
            .current_dir(invocation.cwd())
            .stdin(Stdio::null());
        command
    }

    fn run_bounded(
        invocation: &ToolInvocation,
        limit: Duration,
    ) -> Result<ToolOutput, ToolError> {
        let mut child = Self::command(invocation)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;

        // Drain both pipes concurrently so a chatty tool cannot block on a
        // full pipe while we poll.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match wait_with_deadline(&mut child, limit) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ToolError::TimedOut {
                    command: invocation.command_line(),
                    timeout: limit,
                });
            }
            Err(source) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ToolError::Wait {
                    program: invocation.program().to_string(),
                    source,
                });
            }
        };

        Ok(ToolOutput {
            status: status.code(),
            stdout: join_reader(stdout),
            stderr: join_reader(stderr),
        })
    }
}

impl ToolRunner for SystemToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, ToolError> {
        tracing::debug!(
            command = %invocation.command_line(),
            cwd = %invocation.cwd().display(),
            "running tool"
        );

        if let Some(limit) = invocation.time_limit() {
            return Self::run_bounded(invocation, limit);
        }

        let output = Self::command(invocation)
            .output()
            .map_err(|source| ToolError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;
        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn wait_with_deadline(child: &mut Child, limit: Duration) -> std::io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            buf
        })
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
