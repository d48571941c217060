//! Process boundary: run one AnyDesk invocation and capture its stdout.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::invocation::Invocation;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Captured outcome of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationResult {
    pub stdout: Vec<u8>,
    /// Exit code; `-1` when the process ended without one (killed by a signal).
    pub exit_code: i32,
}

impl InvocationResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an invocation of the AnyDesk executable.
///
/// `Err` means the process could not be launched at all.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &Path, invocation: &Invocation) -> io::Result<InvocationResult>;
}

/// Keeps a console window from flashing up when AnyDesk is launched.
pub trait VisibilityHook: Send + Sync {
    fn suppress_visibility(&self, command: &mut Command);
}

/// For platforms without the concept of a console window.
pub struct NoVisibilityChange;

impl VisibilityHook for NoVisibilityChange {
    fn suppress_visibility(&self, _command: &mut Command) {}
}

/// Launches the child with `CREATE_NO_WINDOW`.
///
/// This is the closest stable std equivalent of hiding the window through
/// the startup info. It only suppresses console windows; a GUI AnyDesk
/// executable still shows its own windows.
#[cfg(windows)]
pub struct HiddenWindow;

#[cfg(windows)]
impl VisibilityHook for HiddenWindow {
    fn suppress_visibility(&self, command: &mut Command) {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        command.creation_flags(CREATE_NO_WINDOW);
    }
}

/// Visibility hook for the platform this binary was compiled for.
pub fn platform_visibility_hook() -> Box<dyn VisibilityHook> {
    #[cfg(windows)]
    {
        Box::new(HiddenWindow)
    }

    #[cfg(not(windows))]
    {
        Box::new(NoVisibilityChange)
    }
}

/// Runs AnyDesk with `std::process::Command`.
///
/// Stdout is captured, stderr is inherited, stdin is null unless the
/// invocation carries a payload.
pub struct SystemRunner {
    visibility: Box<dyn VisibilityHook>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::with_visibility(platform_visibility_hook())
    }

    pub fn with_visibility(visibility: Box<dyn VisibilityHook>) -> Self {
        Self { visibility }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, invocation: &Invocation) -> io::Result<InvocationResult> {
        let mut command = Command::new(program);
        command
            .args(&invocation.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        self.visibility.suppress_visibility(&mut command);

        // Never log the stdin payload, it carries passwords
        debug!(
            "Running {} {:?} (stdin: {})",
            program.display(),
            invocation.args,
            invocation.stdin.is_some()
        );

        let mut child = command.spawn()?;

        if let (Some(payload), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
            if let Err(e) = stdin.write_all(payload.as_bytes()) {
                // The child may exit without reading stdin; its status says what happened
                if e.kind() != io::ErrorKind::BrokenPipe {
                    warn!("Failed to write stdin to {}: {}", program.display(), e);
                }
            }
            // Dropping closes the pipe so the child sees EOF
        }

        let output = child.wait_with_output()?;
        let exit_code = output.status.code().unwrap_or(-1);
        debug!("{} exited with {}", program.display(), exit_code);

        Ok(InvocationResult {
            stdout: output.stdout,
            exit_code,
        })
    }
}

/// Scripted runner that records every call.
#[cfg(test)]
pub struct MockRunner {
    responses: std::sync::Mutex<std::collections::VecDeque<io::Result<InvocationResult>>>,
    calls: std::sync::Mutex<Vec<(std::path::PathBuf, Invocation)>>,
}

#[cfg(test)]
impl MockRunner {
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(std::collections::VecDeque::new()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Queue a completed run.
    #[must_use]
    pub fn then_exit(self, exit_code: i32, stdout: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(InvocationResult {
            stdout: stdout.as_bytes().to_vec(),
            exit_code,
        }));
        self
    }

    /// Queue a launch failure.
    #[must_use]
    pub fn then_fail_launch(self, kind: io::ErrorKind) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(io::Error::new(kind, "mock launch failure")));
        self
    }

    pub fn calls(&self) -> Vec<(std::path::PathBuf, Invocation)> {
        self.calls.lock().unwrap().clone()
    }

    /// Arguments of every recorded call, in order.
    pub fn args(&self) -> Vec<Vec<String>> {
        self.calls().into_iter().map(|(_, inv)| inv.args).collect()
    }
}

#[cfg(test)]
impl ProcessRunner for MockRunner {
    fn run(&self, program: &Path, invocation: &Invocation) -> io::Result<InvocationResult> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_path_buf(), invocation.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call: {:?}", invocation.args))
    }
}
