//! Documented AnyDesk exit codes.
//!
//! See https://support.anydesk.com/Exit_Codes
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

/// Legacy-installation cleanup failures start at this code.
pub const INSTALLER_BASE: i32 = 0xad1000;

/// Describe a documented exit code.
///
/// Returns `None` for 0 and for every code AnyDesk does not document; those
/// are passed through to the caller unconverted.
pub fn describe(code: i32) -> Option<&'static str> {
    let description = match code {
        1000 => "AnyDesk could not run at all because ntdll was not found.",
        1001 => "AnyDesk could not run because kernel32 was not found.",
        7000 => "Path initialization failed. See windows event log for details.",
        7001 => "Signature check failed.",
        7002 => "Unrecognized command line parameter.",
        7003 => "Could not start process (already started).",
        8000 => "The requested operation requires elevation (start as admin).",
        9000 => "Generic exception occured in application. See trace.",
        9001 => "The process terminated itself because of a severe error condition. See trace.",
        9002 => "The process encountered a system exception. Please contact support.",
        9004 => "Error while writing the requested information to stdout.",
        9005 => "Error while reading required information from stdin.",
        9006 => "The password to be set is too short.",
        9007 => "Error while registering licence. See trace for for information.",
        9010 => "Could not perform the requested operation because the AnyDesk service was not running.",
        0xad1000 => "Could not remove an older client's executable.",
        0xad1001 => "Could not stop an older client's service.",
        0xad1002 => "Could not terminate an older client's processes.",
        0xad1003 => "Could not install the service. May happen in case a Windows Control Panel is open.",
        0xad1004 => "An unexpected error occurred.",
        0xad1005 => "Received invalid installation parameters.",
        0xad1006 => "Could not install custom client (installation set to disallowed). ",
        _ => return None,
    };
    Some(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_an_error() {
        assert_eq!(describe(0), None);
    }

    #[test]
    fn test_undocumented_codes_pass_through() {
        for code in [1, 2, 127, 255, 9003, 9008, 9009, 0xad1007, -1] {
            assert_eq!(describe(code), None, "code {code}");
        }
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(describe(9006), Some("The password to be set is too short."));
    }

    #[test]
    fn test_service_not_running_code() {
        assert_eq!(
            describe(9010),
            Some("Could not perform the requested operation because the AnyDesk service was not running.")
        );
    }

    #[test]
    fn test_installer_codes() {
        assert_eq!(
            describe(INSTALLER_BASE),
            Some("Could not remove an older client's executable.")
        );
        assert_eq!(describe(INSTALLER_BASE + 4), Some("An unexpected error occurred."));
        // Trailing space is part of the vendor text
        assert!(describe(0xad1006).is_some_and(|d| d.ends_with(". ")));
    }

    #[test]
    fn test_every_documented_code_has_a_description() {
        let documented = [
            1000, 1001, 7000, 7001, 7002, 7003, 8000, 9000, 9001, 9002, 9004, 9005, 9006, 9007,
            9010, 0xad1000, 0xad1001, 0xad1002, 0xad1003, 0xad1004, 0xad1005, 0xad1006,
        ];
        for code in documented {
            assert!(describe(code).is_some(), "code {code}");
        }
    }
}
