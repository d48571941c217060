//! Chat-style keyword commands.
//!
//! A command line is a keyword followed by space-separated flag tokens:
//!
//! ```text
//! invite [id] [password|pass|pwd|pw]
//! unshare | uninvite | remove-password
//! version
//! ```
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::{AnyDesk, InfoQuery, ProcessRunner};
use crate::commands::invite::{self, InviteRequest};
use crate::commands::{info, password};
use crate::output::OutputControls;
use anyhow::{bail, Result};
use std::sync::Arc;

/// A parsed keyword command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCommand {
    Invite(InviteRequest),
    RemovePassword,
    Version,
}

/// Parse a command line. Returns `None` for empty lines and unknown keywords.
///
/// Keywords and flag tokens are case-insensitive; unknown flag tokens are
/// ignored.
pub fn parse(line: &str) -> Option<KeywordCommand> {
    let fields: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    let (keyword, flags) = fields.split_first()?;

    match keyword.as_str() {
        "invite" => {
            let mut request = InviteRequest::default();
            for flag in flags {
                match flag.as_str() {
                    "id" => request.force_id = true,
                    "password" | "pass" | "pwd" | "pw" => request.with_password = true,
                    _ => {}
                }
            }
            Some(KeywordCommand::Invite(request))
        }
        "unshare" | "uninvite" | "remove-password" => Some(KeywordCommand::RemovePassword),
        "version" => Some(KeywordCommand::Version),
        _ => None,
    }
}

/// Parse and run a command line.
///
/// Invites run on a worker thread, like they would behind a chat UI that
/// must not block.
pub fn run_line<R: ProcessRunner + 'static>(
    anydesk: Arc<AnyDesk<R>>,
    line: &str,
    output: &OutputControls,
) -> Result<()> {
    let Some(command) = parse(line) else {
        bail!("Unknown command: '{}'", line.trim());
    };

    match command {
        KeywordCommand::Invite(request) => invite::invite(anydesk, request, true, output),
        KeywordCommand::RemovePassword => password::remove(&*anydesk, output),
        KeywordCommand::Version => info::show(&*anydesk, InfoQuery::Version, output),
    }
}
