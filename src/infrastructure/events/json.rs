//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                app,
                environment,
                version,
                test_mode,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "app": app,
                    "environment": environment,
                    "version": version,
                    "test_mode": test_mode,
                })
            }

            DeployEvent::PhaseEntered { phase } => {
                serde_json::json!({
                    "event": "phase",
                    "command": "deploy",
                    "phase": phase.as_str(),
                })
            }

            DeployEvent::Diagnostic {
                level,
                component,
                message,
            } => {
                serde_json::json!({
                    "event": "diagnostic",
                    "command": "deploy",
                    "level": level.as_str(),
                    "component": component,
                    "message": message,
                })
            }

            DeployEvent::ToolInvoked { command, cwd } => {
                serde_json::json!({
                    "event": "tool",
                    "command": "deploy",
                    "tool": command,
                    "cwd": cwd.display().to_string(),
                })
            }

            DeployEvent::ArtifactBuilt {
                path,
                kind,
                size_bytes,
                checksum,
            } => {
                serde_json::json!({
                    "event": "artifact",
                    "command": "deploy",
                    "path": path.display().to_string(),
                    "kind": kind.as_str(),
                    "size_bytes": size_bytes,
                    "checksum": checksum,
                })
            }

            DeployEvent::HostsPrepared { environment, hosts } => {
                serde_json::json!({
                    "event": "hosts_prepared",
                    "command": "deploy",
                    "environment": environment,
                    "hosts": hosts,
                })
            }

            DeployEvent::TransferPlanned {
                artifact,
                environment,
                hosts,
                test_mode,
            } => {
                serde_json::json!({
                    "event": "transfer_planned",
                    "command": "deploy",
                    "artifact": artifact.display().to_string(),
                    "environment": environment,
                    "hosts": hosts,
                    "test_mode": test_mode,
                })
            }

            DeployEvent::Failed { phase, kind, error } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "failed",
                    "phase": phase.as_str(),
                    "kind": kind.as_str(),
                    "error": error,
                })
            }

            DeployEvent::Completed {
                artifact,
                elapsed_ms,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "success",
                    "artifact": artifact.display().to_string(),
                    "elapsed_ms": elapsed_ms as u64,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::PipelinePhase;
    use crate::error::ErrorKind;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Started {
            app: "A".to_string(),
            environment: "E".to_string(),
            version: "v1".to_string(),
            test_mode: false,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["app"], "A");
        assert_eq!(events[0]["version"], "v1");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            artifact: PathBuf::from("build/A/A-v1.tar.gz"),
            elapsed_ms: 12,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["status"], "success");
        assert_eq!(events[0]["artifact"], "build/A/A-v1.tar.gz");
    }

    #[test]
    fn json_sink_outputs_failed_on_errors() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Failed {
            phase: PipelinePhase::Packaging,
            kind: ErrorKind::Build,
            error: "`tar` failed".to_string(),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["status"], "failed");
        assert_eq!(events[0]["phase"], "packaging");
        assert_eq!(events[0]["kind"], "build");
    }
}
