//! Argument and stdin conventions of the AnyDesk command line.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

const SET_PASSWORD: &str = "--set-password";
const REMOVE_PASSWORD: &str = "--remove-password";
const WITH_PASSWORD: &str = "--with-password";
const FULLSCREEN: &str = "--fullscreen";
const FILE_TRANSFER: &str = "--file-transfer";
const PLAIN: &str = "--plain";

/// Read-only info queries. These are the only operations where AnyDesk
/// reports a stopped service through stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoQuery {
    Alias,
    Id,
    Status,
    Version,
}

impl InfoQuery {
    /// Command-line flag for this query.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Alias => "--get-alias",
            Self::Id => "--get-id",
            Self::Status => "--get-status",
            Self::Version => "--version",
        }
    }
}

/// Options for connecting to a remote session.
///
/// Every field is independent. An empty password or a `false` flag adds
/// nothing to the command line.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub password: String,
    pub fullscreen: bool,
    pub file_transfer: bool,
    pub plain: bool,
}

impl ConnectOptions {
    /// Append option flags in the order AnyDesk's argument parser expects.
    fn apply_to(&self, invocation: &mut Invocation) {
        if !self.password.is_empty() {
            invocation.args.push(WITH_PASSWORD.to_string());
            invocation.stdin = Some(self.password.clone());
        }
        if self.fullscreen {
            invocation.args.push(FULLSCREEN.to_string());
        }
        if self.file_transfer {
            invocation.args.push(FILE_TRANSFER.to_string());
        }
        if self.plain {
            invocation.args.push(PLAIN.to_string());
        }
    }
}

/// One call of the AnyDesk executable: arguments plus optional stdin payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub args: Vec<String>,
    /// Written verbatim to the child's stdin, then closed. `None` means the
    /// child gets a null stdin.
    pub stdin: Option<String>,
}

impl Invocation {
    fn flag(flag: &str) -> Self {
        Self {
            args: vec![flag.to_string()],
            stdin: None,
        }
    }

    /// `--set-password`, with the password on stdin.
    pub fn set_password(password: &str) -> Self {
        Self {
            args: vec![SET_PASSWORD.to_string()],
            stdin: Some(password.to_string()),
        }
    }

    /// `--remove-password`.
    pub fn remove_password() -> Self {
        Self::flag(REMOVE_PASSWORD)
    }

    /// Connect to `reference` (an ID or alias).
    pub fn connect(reference: &str, options: &ConnectOptions) -> Self {
        let mut invocation = Self {
            args: vec![reference.to_string()],
            stdin: None,
        };
        options.apply_to(&mut invocation);
        invocation
    }

    /// One of the read-only info queries.
    pub fn info(query: InfoQuery) -> Self {
        Self::flag(query.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_password_writes_stdin_verbatim() {
        let inv = Invocation::set_password(" secret \n");
        assert_eq!(inv.args, vec!["--set-password"]);
        assert_eq!(inv.stdin.as_deref(), Some(" secret \n"));
    }

    #[test]
    fn test_remove_password_has_no_stdin() {
        let inv = Invocation::remove_password();
        assert_eq!(inv.args, vec!["--remove-password"]);
        assert_eq!(inv.stdin, None);
    }

    #[test]
    fn test_info_flags() {
        assert_eq!(Invocation::info(InfoQuery::Alias).args, vec!["--get-alias"]);
        assert_eq!(Invocation::info(InfoQuery::Id).args, vec!["--get-id"]);
        assert_eq!(Invocation::info(InfoQuery::Status).args, vec!["--get-status"]);
        assert_eq!(Invocation::info(InfoQuery::Version).args, vec!["--version"]);
        assert_eq!(Invocation::info(InfoQuery::Version).stdin, None);
    }

    #[test]
    fn test_connect_with_password() {
        let options = ConnectOptions {
            password: "x".to_string(),
            ..Default::default()
        };
        let inv = Invocation::connect("123456789", &options);
        assert_eq!(inv.args, vec!["123456789", "--with-password"]);
        assert_eq!(inv.stdin.as_deref(), Some("x"));
    }

    #[test]
    fn test_connect_without_options() {
        let inv = Invocation::connect("office@ad", &ConnectOptions::default());
        assert_eq!(inv.args, vec!["office@ad"]);
        assert_eq!(inv.stdin, None);
    }

    #[test]
    fn test_connect_flag_order_is_fixed() {
        // Fields assigned in reverse of the emitted order
        let mut options = ConnectOptions::default();
        options.plain = true;
        options.file_transfer = true;
        options.fullscreen = true;
        options.password = "pw".to_string();

        let inv = Invocation::connect("123456789", &options);
        assert_eq!(
            inv.args,
            vec![
                "123456789",
                "--with-password",
                "--fullscreen",
                "--file-transfer",
                "--plain"
            ]
        );
    }

    #[test]
    fn test_connect_flags_without_password() {
        let options = ConnectOptions {
            fullscreen: true,
            plain: true,
            ..Default::default()
        };
        let inv = Invocation::connect("123456789", &options);
        assert_eq!(inv.args, vec!["123456789", "--fullscreen", "--plain"]);
        assert_eq!(inv.stdin, None);
    }
}
