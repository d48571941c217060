//! AnyDesk controller: a synchronous façade over the AnyDesk command line.
//!
//! Every operation is an independent resolve → build → launch → interpret
//! cycle. Nothing is cached between calls, and there is no timeout: a hung
//! AnyDesk process blocks the caller.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::error::{ControllerError, Result};
use crate::anydesk::exit_code;
use crate::anydesk::invocation::{ConnectOptions, InfoQuery, Invocation};
use crate::anydesk::locator::Locator;
use crate::anydesk::runner::{InvocationResult, ProcessRunner, SystemRunner};
use crate::anydesk::sentinel;
use std::path::{Path, PathBuf};

/// Controller for a locally installed AnyDesk client.
pub struct AnyDesk<R: ProcessRunner = SystemRunner> {
    /// Explicit executable path; `None` means search on every call.
    path: Option<PathBuf>,
    locator: Locator,
    runner: R,
}

impl AnyDesk<SystemRunner> {
    /// Controller for the real system.
    ///
    /// An empty or missing `path` means the executable is located on each call.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self::with_runner(path, Locator::system(), SystemRunner::new())
    }
}

impl<R: ProcessRunner> AnyDesk<R> {
    /// Controller with an injected locator and runner (for testing).
    pub fn with_runner(path: Option<PathBuf>, locator: Locator, runner: R) -> Self {
        let path = path.filter(|p| !p.as_os_str().is_empty());
        Self {
            path,
            locator,
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Path the next call would launch.
    pub fn resolve(&self) -> Result<PathBuf> {
        self.locator.resolve(self.path.as_deref())
    }

    /// Resolve the executable and run one invocation.
    fn execute(&self, invocation: &Invocation) -> Result<InvocationResult> {
        let program = self.resolve()?;
        self.runner
            .run(&program, invocation)
            .map_err(|source| ControllerError::ProcessLaunchFailed {
                path: program.clone(),
                source,
            })
    }

    /// Run a mutating operation; nonzero exits go through the exit-code table.
    fn execute_checked(&self, invocation: &Invocation) -> Result<()> {
        let result = self.execute(invocation)?;
        if result.success() {
            return Ok(());
        }
        Err(exit_code_error(result.exit_code))
    }

    /// Run an info query and return its trimmed stdout.
    fn query(&self, query: InfoQuery) -> Result<String> {
        let result = self.execute(&Invocation::info(query))?;
        if !result.success() {
            return Err(info_error(&result));
        }
        Ok(String::from_utf8_lossy(&result.stdout).trim().to_string())
    }

    /// Set the unattended-access password. The password goes to stdin verbatim.
    pub fn set_password(&self, password: &str) -> Result<()> {
        self.execute_checked(&Invocation::set_password(password))
    }

    /// Remove the unattended-access password.
    ///
    /// Known exit codes are translated like for [`AnyDesk::set_password`].
    /// Undocumented codes surface unchanged as
    /// [`ControllerError::UnrecognizedFailure`].
    pub fn remove_password(&self) -> Result<()> {
        self.execute_checked(&Invocation::remove_password())
    }

    /// Connect to a session reference (ID or alias).
    ///
    /// Blocks until AnyDesk returns. The outcome is reported to the caller
    /// rather than dropped.
    pub fn connect(&self, reference: &str, options: &ConnectOptions) -> Result<()> {
        self.execute_checked(&Invocation::connect(reference, options))
    }

    pub fn alias(&self) -> Result<String> {
        self.query(InfoQuery::Alias)
    }

    pub fn id(&self) -> Result<String> {
        self.query(InfoQuery::Id)
    }

    /// Connection status as reported by AnyDesk (e.g. `online`).
    pub fn status(&self) -> Result<String> {
        self.query(InfoQuery::Status)
    }

    pub fn version(&self) -> Result<String> {
        self.query(InfoQuery::Version)
    }

    /// Explicit executable path, if one was configured.
    pub fn explicit_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Translate a nonzero exit code.
fn exit_code_error(code: i32) -> ControllerError {
    match exit_code::describe(code) {
        Some(description) => ControllerError::KnownExitCode { code, description },
        None => ControllerError::UnrecognizedFailure(code),
    }
}

/// Translate a failed info query.
///
/// The stdout sentinel wins over whatever exit code came with it.
fn info_error(result: &InvocationResult) -> ControllerError {
    if sentinel::is_service_not_running(&result.stdout) {
        return ControllerError::ServiceNotRunning;
    }
    exit_code_error(result.exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anydesk::locator::{LocatorConfig, MockEnv, MockFs};
    use crate::anydesk::runner::MockRunner;
    use std::io;

    fn locator_with(executable: Option<&str>) -> Locator {
        let config = LocatorConfig {
            executable_name: "anydesk".to_string(),
            install_dirs: vec![PathBuf::from("/opt/anydesk")],
        };
        let mut fs = MockFs::new();
        if let Some(path) = executable {
            fs = fs.with_executable(path);
        }
        let env = MockEnv::new().with_path(&["/usr/bin"]);
        Locator::with_deps(config, Box::new(env), Box::new(fs))
    }

    fn controller(runner: MockRunner) -> AnyDesk<MockRunner> {
        AnyDesk::with_runner(None, locator_with(Some("/usr/bin/anydesk")), runner)
    }

    #[test]
    fn test_set_password_too_short() {
        let anydesk = controller(MockRunner::new().then_exit(9006, ""));
        match anydesk.set_password("x") {
            Err(ControllerError::KnownExitCode { code, description }) => {
                assert_eq!(code, 9006);
                assert_eq!(description, "The password to be set is too short.");
            }
            other => panic!("expected KnownExitCode, got {other:?}"),
        }
    }

    #[test]
    fn test_set_password_sends_stdin() {
        let anydesk = controller(MockRunner::new().then_exit(0, ""));
        anydesk.set_password("hunter2hunter2").unwrap();

        let calls = anydesk.runner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("/usr/bin/anydesk"));
        assert_eq!(calls[0].1.args, vec!["--set-password"]);
        assert_eq!(calls[0].1.stdin.as_deref(), Some("hunter2hunter2"));
    }

    #[test]
    fn test_set_password_unknown_code() {
        let anydesk = controller(MockRunner::new().then_exit(3, ""));
        assert!(matches!(
            anydesk.set_password("abcdefgh"),
            Err(ControllerError::UnrecognizedFailure(3))
        ));
    }

    #[test]
    fn test_mutating_calls_ignore_sentinel() {
        let anydesk = controller(MockRunner::new().then_exit(1, "SERVICE_NOT_RUNNING\n"));
        assert!(matches!(
            anydesk.set_password("abcdefgh"),
            Err(ControllerError::UnrecognizedFailure(1))
        ));
    }

    #[test]
    fn test_remove_password_translates_known_codes() {
        let anydesk = controller(MockRunner::new().then_exit(8000, ""));
        match anydesk.remove_password() {
            Err(ControllerError::KnownExitCode { description, .. }) => {
                assert_eq!(
                    description,
                    "The requested operation requires elevation (start as admin)."
                );
            }
            other => panic!("expected KnownExitCode, got {other:?}"),
        }
        assert_eq!(anydesk.runner().args(), vec![vec!["--remove-password".to_string()]]);
    }

    #[test]
    fn test_remove_password_success() {
        let anydesk = controller(MockRunner::new().then_exit(0, ""));
        assert!(anydesk.remove_password().is_ok());
        assert_eq!(anydesk.runner().calls()[0].1.stdin, None);
    }

    #[test]
    fn test_connect_builds_arguments() {
        let anydesk = controller(MockRunner::new().then_exit(0, ""));
        let options = ConnectOptions {
            password: "x".to_string(),
            ..Default::default()
        };
        anydesk.connect("123456789", &options).unwrap();

        let calls = anydesk.runner().calls();
        assert_eq!(calls[0].1.args, vec!["123456789", "--with-password"]);
        assert_eq!(calls[0].1.stdin.as_deref(), Some("x"));
    }

    #[test]
    fn test_connect_reports_failure() {
        let anydesk = controller(MockRunner::new().then_exit(7002, ""));
        match anydesk.connect("123456789", &ConnectOptions::default()) {
            Err(ControllerError::KnownExitCode { code, .. }) => assert_eq!(code, 7002),
            other => panic!("expected KnownExitCode, got {other:?}"),
        }
    }

    #[test]
    fn test_info_queries_return_trimmed_stdout() {
        let runner = MockRunner::new()
            .then_exit(0, "  my desk@ad \n")
            .then_exit(0, "123456789\n")
            .then_exit(0, "online\r\n")
            .then_exit(0, "7.1.0\n");
        let anydesk = controller(runner);

        // Interior whitespace is untouched
        assert_eq!(anydesk.alias().unwrap(), "my desk@ad");
        assert_eq!(anydesk.id().unwrap(), "123456789");
        assert_eq!(anydesk.status().unwrap(), "online");
        assert_eq!(anydesk.version().unwrap(), "7.1.0");

        assert_eq!(
            anydesk.runner().args(),
            vec![
                vec!["--get-alias".to_string()],
                vec!["--get-id".to_string()],
                vec!["--get-status".to_string()],
                vec!["--version".to_string()],
            ]
        );
    }

    #[test]
    fn test_status_service_not_running() {
        let anydesk = controller(MockRunner::new().then_exit(1, "SERVICE_NOT_RUNNING\n"));
        assert!(matches!(
            anydesk.status(),
            Err(ControllerError::ServiceNotRunning)
        ));
    }

    #[test]
    fn test_status_empty_output_is_unrecognized() {
        let anydesk = controller(MockRunner::new().then_exit(1, ""));
        assert!(matches!(
            anydesk.status(),
            Err(ControllerError::UnrecognizedFailure(1))
        ));
    }

    #[test]
    fn test_sentinel_wins_over_known_code() {
        let anydesk = controller(
            MockRunner::new()
                .then_exit(9010, "SERVICE_NOT_RUNNING\n")
                .then_exit(9010, ""),
        );
        assert!(matches!(
            anydesk.status(),
            Err(ControllerError::ServiceNotRunning)
        ));
        // Without the sentinel the exit-code table still applies
        match anydesk.id() {
            Err(ControllerError::KnownExitCode { code, .. }) => assert_eq!(code, 9010),
            other => panic!("expected KnownExitCode, got {other:?}"),
        }
    }

    #[test]
    fn test_sentinel_ignored_on_success() {
        let anydesk = controller(MockRunner::new().then_exit(0, "SERVICE_NOT_RUNNING\n"));
        assert_eq!(anydesk.version().unwrap(), "SERVICE_NOT_RUNNING");
    }

    #[test]
    fn test_binary_not_found_skips_launch() {
        let anydesk = AnyDesk::with_runner(None, locator_with(None), MockRunner::new());
        assert!(matches!(
            anydesk.version(),
            Err(ControllerError::BinaryNotFound { .. })
        ));
        assert!(anydesk.runner().calls().is_empty());
    }

    #[test]
    fn test_launch_failure() {
        let runner = MockRunner::new().then_fail_launch(io::ErrorKind::PermissionDenied);
        let anydesk = controller(runner);
        match anydesk.status() {
            Err(ControllerError::ProcessLaunchFailed { path, source }) => {
                assert_eq!(path, PathBuf::from("/usr/bin/anydesk"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected ProcessLaunchFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_path_bypasses_locator() {
        let explicit = PathBuf::from("/custom/AnyDesk");
        let anydesk = AnyDesk::with_runner(
            Some(explicit.clone()),
            locator_with(None),
            MockRunner::new().then_exit(0, "online"),
        );
        assert_eq!(anydesk.status().unwrap(), "online");
        assert_eq!(anydesk.runner().calls()[0].0, explicit);
        assert_eq!(anydesk.explicit_path(), Some(explicit.as_path()));
    }

    #[test]
    fn test_empty_explicit_path_means_search() {
        let anydesk = AnyDesk::with_runner(
            Some(PathBuf::new()),
            locator_with(Some("/opt/anydesk/anydesk")),
            MockRunner::new().then_exit(0, "1"),
        );
        assert_eq!(anydesk.explicit_path(), None);
        anydesk.id().unwrap();
        assert_eq!(
            anydesk.runner().calls()[0].0,
            PathBuf::from("/opt/anydesk/anydesk")
        );
    }

    #[test]
    fn test_each_call_resolves_again() {
        let anydesk = AnyDesk::with_runner(None, locator_with(None), MockRunner::new());
        assert!(anydesk.resolve().is_err());
        assert!(anydesk.resolve().is_err());
    }
}
