//! Locate the AnyDesk executable.
//!
//! Search order:
//! 1. Every `PATH` entry, in order (an empty entry means `.`)
//! 2. The platform's known install directories
//!
//! Environment and filesystem access go through small traits so the search
//! can be tested without touching the real machine.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::error::{ControllerError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Access to environment variables.
pub trait EnvProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<OsString>;
}

/// Reads the real process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Filesystem checks needed by the search.
pub trait FsProvider: Send + Sync {
    /// True when `path` is a regular file the current user may execute.
    fn is_executable(&self, path: &Path) -> bool;
}

/// Uses the real filesystem.
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn is_executable(&self, path: &Path) -> bool {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => return false,
        };
        if !metadata.is_file() {
            return false;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o111 == 0 {
                return false;
            }
        }

        true
    }
}

/// Executable name and install directories for one platform.
///
/// Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// File name including any platform suffix (`anydesk.exe` on Windows).
    pub executable_name: String,
    /// Searched after `PATH`, in order.
    pub install_dirs: Vec<PathBuf>,
}

impl LocatorConfig {
    /// Configuration for the platform this binary was compiled for.
    pub fn for_current_platform(env: &dyn EnvProvider) -> Self {
        #[cfg(windows)]
        {
            let program_files_x86 = env
                .get("PROGRAMFILES(X86)")
                .map(PathBuf::from)
                .unwrap_or_default();
            Self {
                executable_name: "anydesk.exe".to_string(),
                install_dirs: vec![program_files_x86.join("AnyDesk")],
            }
        }

        #[cfg(target_os = "macos")]
        {
            let _ = env;
            Self {
                executable_name: "anydesk".to_string(),
                install_dirs: vec![PathBuf::from("/Applications/AnyDesk.app/Contents/MacOS")],
            }
        }

        #[cfg(not(any(windows, target_os = "macos")))]
        {
            let _ = env;
            Self {
                executable_name: "anydesk".to_string(),
                install_dirs: vec![PathBuf::from("/opt/anydesk")],
            }
        }
    }
}

/// Finds the AnyDesk executable.
///
/// Failures are not cached; every call searches again.
pub struct Locator {
    config: LocatorConfig,
    env: Box<dyn EnvProvider>,
    fs: Box<dyn FsProvider>,
}

impl Locator {
    /// Locator for the current platform backed by the real environment.
    pub fn system() -> Self {
        let config = LocatorConfig::for_current_platform(&SystemEnv);
        Self::with_deps(config, Box::new(SystemEnv), Box::new(SystemFs))
    }

    /// Locator with injected dependencies (for testing).
    pub fn with_deps(
        config: LocatorConfig,
        env: Box<dyn EnvProvider>,
        fs: Box<dyn FsProvider>,
    ) -> Self {
        Self { config, env, fs }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Candidate directories in search order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = match self.env.get("PATH") {
            Some(path) => std::env::split_paths(&path)
                .map(|dir| {
                    // Shell semantics: an empty entry is the current directory
                    if dir.as_os_str().is_empty() {
                        PathBuf::from(".")
                    } else {
                        dir
                    }
                })
                .collect(),
            None => Vec::new(),
        };
        dirs.extend(self.config.install_dirs.iter().cloned());
        dirs
    }

    /// Return the first candidate that is an executable file.
    pub fn locate(&self) -> Result<PathBuf> {
        for dir in self.search_dirs() {
            let candidate = dir.join(&self.config.executable_name);
            if self.fs.is_executable(&candidate) {
                debug!("Found AnyDesk at {}", candidate.display());
                return Ok(candidate);
            }
        }

        Err(ControllerError::BinaryNotFound {
            name: self.config.executable_name.clone(),
        })
    }

    /// Use `explicit` verbatim when it is non-empty, otherwise search.
    ///
    /// An explicit path is not checked for existence; a bad path surfaces
    /// when the process is launched.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.to_path_buf()),
            _ => self.locate(),
        }
    }
}

/// Test environment with predefined variables.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Set `PATH` from a list of directories joined with the platform separator.
    #[must_use]
    pub fn with_path(self, dirs: &[&str]) -> Self {
        let joined = std::env::join_paths(dirs).expect("valid PATH entries");
        self.with_var("PATH", joined)
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// Test filesystem where only registered paths are executable.
#[cfg(test)]
#[derive(Default)]
pub struct MockFs {
    executables: std::collections::HashSet<PathBuf>,
}

#[cfg(test)]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }
}

#[cfg(test)]
impl FsProvider for MockFs {
    fn is_executable(&self, path: &Path) -> bool {
        self.executables.contains(path)
    }
}
