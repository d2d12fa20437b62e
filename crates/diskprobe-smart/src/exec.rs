use crate::SmartConfig;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Output tokens that mean the device cannot do SMART at all. smartctl
/// prints them regardless of how it exits, so the scan ignores the
/// exit status entirely.
pub const UNSUPPORTED_MARKERS: [&str; 2] = ["Unsupported", "Unknown"];

/// Captured result of one smartctl invocation.
///
/// The exit status is advisory only; `output` is authoritative for parsing.
/// Failure detail is carried as data so the evaluator can fold it into the
/// device verdict instead of aborting the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticOutcome {
    /// Combined stdout and stderr text.
    pub output: String,
    /// True on spawn failure, wait failure, timeout, or non-zero exit.
    pub command_failed: bool,
    /// Human-readable failure detail when `command_failed` is set.
    pub failure: Option<String>,
}

impl DiagnosticOutcome {
    pub fn clean(output: String) -> Self {
        Self {
            output,
            command_failed: false,
            failure: None,
        }
    }

    pub fn failed(output: String, failure: String) -> Self {
        Self {
            output,
            command_failed: true,
            failure: Some(failure),
        }
    }

    /// Whether the output carries an unsupported-device marker.
    pub fn unsupported(&self) -> bool {
        UNSUPPORTED_MARKERS
            .iter()
            .any(|marker| self.output.contains(marker))
    }

    pub fn failure_detail(&self) -> &str {
        self.failure.as_deref().unwrap_or("command failed")
    }
}

/// Access to per-device diagnostics.
///
/// The evaluators run against this seam, so the checks can be exercised
/// without real hardware or a smartctl installation.
pub trait DiagnosticTool {
    /// Health summary (`smartctl -H`).
    fn health_summary(&self, device: &str) -> DiagnosticOutcome;

    /// Full report (`smartctl -a`): status lines, attributes, self-test log.
    fn full_report(&self, device: &str) -> DiagnosticOutcome;
}

/// The real tool: invokes smartctl under sudo with a bounded wait.
pub struct Smartctl {
    path: String,
    timeout: Duration,
}

impl Smartctl {
    pub fn new(path: impl Into<String>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &SmartConfig) -> Self {
        Self::new(config.smartctl_path.clone(), config.command_timeout)
    }

    fn run(&self, flag: &str, device: &str) -> DiagnosticOutcome {
        let mut command = Command::new("sudo");
        command
            .arg(&self.path)
            .arg(flag)
            .arg(device)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => return DiagnosticOutcome::failed(String::new(), err.to_string()),
        };

        // The pipes must drain while we poll, or a child writing more than
        // one pipe buffer of report text blocks forever and reads as a
        // timeout
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        match wait_bounded(&mut child, self.timeout) {
            Ok(Some(status)) => {
                let output = collect_output(stdout_reader, stderr_reader);
                if status.success() {
                    DiagnosticOutcome::clean(output)
                } else {
                    DiagnosticOutcome::failed(output, describe_exit(status))
                }
            }
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                let output = collect_output(stdout_reader, stderr_reader);
                DiagnosticOutcome::failed(
                    output,
                    format!("timed out after {}s", self.timeout.as_secs()),
                )
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                let output = collect_output(stdout_reader, stderr_reader);
                DiagnosticOutcome::failed(output, err.to_string())
            }
        }
    }
}

impl DiagnosticTool for Smartctl {
    fn health_summary(&self, device: &str) -> DiagnosticOutcome {
        self.run("-H", device)
    }

    fn full_report(&self, device: &str) -> DiagnosticOutcome {
        self.run("-a", device)
    }
}

/// Poll the child until it exits or the timeout lapses; `Ok(None)` means the
/// caller owns killing it.
fn wait_bounded(child: &mut Child, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
    let start = Instant::now();
    loop {
        match child.try_wait()? {
            Some(status) => return Ok(Some(status)),
            None => {
                if start.elapsed() > timeout {
                    return Ok(None);
                }
                std::thread::sleep(Duration::from_millis(100));
            }
        }
    }
}

/// Drain one pipe on its own thread. The reader runs to EOF, which a kill
/// forces by closing the child's end.
fn spawn_reader<R>(pipe: Option<R>) -> Option<std::thread::JoinHandle<String>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        std::thread::spawn(move || {
            let mut text = String::new();
            let _ = pipe.read_to_string(&mut text);
            text
        })
    })
}

/// Join the reader threads: whatever the child wrote, stdout first, then
/// stderr.
fn collect_output(
    stdout: Option<std::thread::JoinHandle<String>>,
    stderr: Option<std::thread::JoinHandle<String>>,
) -> String {
    let mut text = String::new();
    for handle in [stdout, stderr].into_iter().flatten() {
        if let Ok(piece) = handle.join() {
            text.push_str(&piece);
        }
    }
    text
}

fn describe_exit(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
