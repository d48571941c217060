//! Runtime configuration for locating AnyDesk.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use std::path::PathBuf;

/// Environment variable holding an explicit AnyDesk executable path.
pub const ANYDESK_PATH_ENV: &str = "ANYDESK_PATH";

/// Explicit AnyDesk executable path, if one is configured.
///
/// Tries in order:
/// 1. The `--anydesk-path` flag
/// 2. The ANYDESK_PATH env var
///
/// `~` is expanded. Empty values are treated as unset, which means the
/// executable is searched for on every call.
pub fn binary_path(flag: Option<&str>) -> Option<PathBuf> {
    let from_env = std::env::var(ANYDESK_PATH_ENV).ok();
    resolve_binary_path(flag, from_env.as_deref())
}

fn resolve_binary_path(flag: Option<&str>, from_env: Option<&str>) -> Option<PathBuf> {
    flag.or(from_env)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
}
