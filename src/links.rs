//! Detect AnyDesk session references in free text.
//!
//! A reference is either a 9-10 digit ID or an alias like `desk@ad`,
//! optionally followed by a namespace path (`desk@ad/company`).
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

// ASCII-only word boundaries; IDs are ASCII digits
const REFERENCE_PATTERN: &str =
    r"(?i)(?-u:\b)([0-9]{9,10}|[a-z0-9.\-_]+@ad(?:/[a-z0-9/.\-_]+)?)(?-u:\b)";

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REFERENCE_PATTERN).expect("reference pattern is valid"))
}

/// A session reference found in text, with a link that opens it in AnyDesk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSuggestion {
    pub reference: String,
    pub url: String,
}

impl LinkSuggestion {
    fn new(reference: &str) -> Self {
        Self {
            reference: reference.to_string(),
            url: format!("anydesk:{}", reference),
        }
    }
}

/// All session references in `text`, in order of appearance.
pub fn find_references(text: &str) -> Vec<LinkSuggestion> {
    reference_regex()
        .find_iter(text)
        .map(|m| LinkSuggestion::new(m.as_str()))
        .collect()
}
