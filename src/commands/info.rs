//! Info commands: status, id, alias, version.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::{AnyDesk, InfoQuery, ProcessRunner};
use crate::output::OutputControls;
use anyhow::{Context, Result};
use serde_json::json;

/// Run one info query and print its value.
pub fn show<R: ProcessRunner>(
    anydesk: &AnyDesk<R>,
    query: InfoQuery,
    output: &OutputControls,
) -> Result<()> {
    let (key, value) = match query {
        InfoQuery::Alias => ("alias", anydesk.alias()),
        InfoQuery::Id => ("id", anydesk.id()),
        InfoQuery::Status => ("status", anydesk.status()),
        InfoQuery::Version => ("version", anydesk.version()),
    };
    let value = value.with_context(|| format!("Failed to get AnyDesk {}", key))?;

    output.report(&json!({ key: value }), || value.clone());
    Ok(())
}
