// StatusBoard - core/roles.rs
//
// Column-role inference: which column holds a status, which holds a date.
// Core layer: pure logic over column names, no I/O.
//
// This is a keyword heuristic, not a schema. A column called "Progress (%)"
// is picked up as a status column when nothing earlier matches, and a date
// column named "Restocked On" is missed. Both outcomes are accepted
// best-effort behaviour.

use crate::util::constants;

/// Keyword lists that drive role inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleKeywords {
    /// Substrings marking a status/progress column.
    pub status: Vec<String>,
    /// Substrings marking a date/timestamp column.
    pub date: Vec<String>,
}

impl Default for RoleKeywords {
    fn default() -> Self {
        Self {
            status: to_owned_list(constants::DEFAULT_STATUS_KEYWORDS),
            date: to_owned_list(constants::DEFAULT_DATE_KEYWORDS),
        }
    }
}

/// Roles inferred for one dataset. Either may be absent; both may name the
/// same column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub status: Option<String>,
    pub date: Option<String>,
}

/// First column, in original order, whose lowercased name contains any of
/// the status keywords.
pub fn infer_status_column(columns: &[String], keywords: &RoleKeywords) -> Option<String> {
    first_matching(columns, &keywords.status)
}

/// First column, in original order, whose lowercased name contains any of
/// the date keywords.
pub fn infer_date_column(columns: &[String], keywords: &RoleKeywords) -> Option<String> {
    first_matching(columns, &keywords.date)
}

/// Infer both roles at once.
pub fn infer_roles(columns: &[String], keywords: &RoleKeywords) -> ColumnRoles {
    let roles = ColumnRoles {
        status: infer_status_column(columns, keywords),
        date: infer_date_column(columns, keywords),
    };
    tracing::debug!(
        status = roles.status.as_deref().unwrap_or("-"),
        date = roles.date.as_deref().unwrap_or("-"),
        "Column roles inferred"
    );
    roles
}

/// True when `text` contains any keyword, ignoring case.
///
/// Shared with the metrics engine's status bucketing.
pub(crate) fn contains_any(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .any(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
}

fn first_matching(columns: &[String], keywords: &[String]) -> Option<String> {
    columns
        .iter()
        .find(|name| contains_any(name, keywords))
        .cloned()
}

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
