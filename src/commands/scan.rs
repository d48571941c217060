//! Scan command: turn session references in text into AnyDesk links.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::links;
use crate::output::OutputControls;
use anyhow::Result;

pub fn scan(text: &str, output: &OutputControls) -> Result<()> {
    let found = links::find_references(text);

    if output.json {
        output.print(&found);
        return Ok(());
    }

    if found.is_empty() {
        println!("No AnyDesk references found.");
        return Ok(());
    }
    for link in &found {
        println!("Open {} in AnyDesk: {}", link.reference, link.url);
    }
    Ok(())
}
