//! Connect command.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::{AnyDesk, ConnectOptions, ProcessRunner};
use crate::output::OutputControls;
use anyhow::{Context, Result};
use serde_json::json;

/// Open a session to `reference` and wait for AnyDesk to return.
pub fn connect<R: ProcessRunner>(
    anydesk: &AnyDesk<R>,
    reference: &str,
    options: &ConnectOptions,
    output: &OutputControls,
) -> Result<()> {
    anydesk
        .connect(reference, options)
        .with_context(|| format!("Could not connect to {}", reference))?;

    output.report(&json!({ "success": true, "reference": reference }), || {
        format!("Connected to {}", reference)
    });
    Ok(())
}
