//! CSS page-break rules for the external paginator

use serde::{Deserialize, Serialize};

/// Selector lists controlling where page boundaries are forced or avoided
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBreakRules {
    /// Break before matching elements
    pub before: Vec<String>,
    /// Break after matching elements
    pub after: Vec<String>,
    /// Never break inside matching elements
    pub avoid: Vec<String>,
}

impl PageBreakRules {
    pub fn new(before: Option<&str>, after: Option<&str>, avoid: Option<&str>) -> Self {
        Self {
            before: parse_selector_list(before),
            after: parse_selector_list(after),
            avoid: parse_selector_list(avoid),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty() && self.avoid.is_empty()
    }
}

/// Split a comma-separated selector list. Tokens are trimmed; empty tokens
/// are dropped.
pub fn parse_selector_list(input: Option<&str>) -> Vec<String> {
    input
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|selector| !selector.is_empty())
        .map(str::to_string)
        .collect()
}
