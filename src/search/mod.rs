//! Search module for list queries.

use crate::entity::Note;
use crate::storage::NoteStore;

/// Parsed filter from a query string.
///
/// Filters are given in the query string with prefixes:
/// - `is:favorite` (or `is:fav`) - Only favorite notes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Keep only favorites
    pub favorites_only: bool,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if filter has any constraints.
    pub fn is_empty(&self) -> bool {
        !self.favorites_only
    }

    pub fn accepts(&self, note: &Note) -> bool {
        !self.favorites_only || note.is_favorite
    }
}

/// A list query: free text plus filters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    pub text: String,
    pub filter: NoteFilter,
}

impl NoteQuery {
    pub fn parse(raw: &str) -> Self {
        let (text, filter) = parse_query(raw);
        Self { text, filter }
    }

    /// Text search first, then the filter, preserving store order.
    pub fn apply(&self, store: &NoteStore) -> Vec<Note> {
        let mut notes = store.search(&self.text);
        if !self.filter.is_empty() {
            notes.retain(|n| self.filter.accepts(n));
        }
        notes
    }
}

/// Parse a raw query string into (remaining query text, filter).
///
/// # Examples
///
/// ```ignore
/// let (query, filter) = parse_query("is:favorite buy milk");
/// assert_eq!(query, "buy milk");
/// assert!(filter.favorites_only);
/// ```
pub fn parse_query(raw: &str) -> (String, NoteFilter) {
    let mut filter = NoteFilter::default();
    let mut remaining = Vec::new();

    for token in raw.split_whitespace() {
        match token.strip_prefix("is:") {
            Some("favorite") | Some("fav") => filter.favorites_only = true,
            _ => remaining.push(token),
        }
    }

    (remaining.join(" "), filter)
}
