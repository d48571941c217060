//! Stdout convention for the read-only info queries.
//!
//! When the AnyDesk service is down, `--get-alias`, `--get-id`,
//! `--get-status` and `--version` print `SERVICE_NOT_RUNNING` and exit
//! nonzero.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

/// Literal printed by AnyDesk when its service is not running.
pub const SERVICE_NOT_RUNNING: &str = "SERVICE_NOT_RUNNING";

/// Check captured stdout of a failed info query for the service sentinel.
///
/// Only surrounding whitespace is ignored; the comparison is exact and
/// case-sensitive.
pub fn is_service_not_running(stdout: &[u8]) -> bool {
    match std::str::from_utf8(stdout) {
        Ok(text) => text.trim() == SERVICE_NOT_RUNNING,
        Err(_) => false,
    }
}
