//! Password commands: set-password, remove-password.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::{AnyDesk, ProcessRunner};
use crate::output::OutputControls;
use crate::password;
use anyhow::{bail, Context, Result};
use serde_json::json;

/// Set the unattended-access password.
///
/// With `generate`, a random session password is used and printed.
pub fn set<R: ProcessRunner>(
    anydesk: &AnyDesk<R>,
    explicit: Option<&str>,
    generate: bool,
    output: &OutputControls,
) -> Result<()> {
    let (pw, generated) = match (explicit, generate) {
        (Some(_), true) => bail!("Pass either a password or --generate, not both"),
        (Some(pw), false) => (pw.to_string(), false),
        (None, true) => (password::generate(), true),
        (None, false) => bail!("No password given (pass one or use --generate)"),
    };

    anydesk
        .set_password(&pw)
        .context("Could not set AnyDesk password")?;

    let shown = generated.then_some(pw.as_str());
    output.report(&json!({ "success": true, "password": shown }), || match shown {
        Some(pw) => format!("Your password has been changed to: {}", pw),
        None => "AnyDesk password has been set.".to_string(),
    });
    Ok(())
}

/// Remove the unattended-access password.
pub fn remove<R: ProcessRunner>(anydesk: &AnyDesk<R>, output: &OutputControls) -> Result<()> {
    anydesk
        .remove_password()
        .context("Could not remove AnyDesk password")?;

    output.report(&json!({ "success": true }), || {
        "AnyDesk password has been removed.".to_string()
    });
    Ok(())
}
