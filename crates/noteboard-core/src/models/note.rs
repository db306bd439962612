//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::search::normalize_query;

/// Identifier of a note, assigned from the board's note count at save time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw id value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A saved note. Notes are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier (see [`crate::NoteBoard::save_draft`] for how it is assigned)
    pub id: NoteId,
    /// Optional heading; may be empty
    pub title: String,
    /// Plain text body; may be empty
    pub content: String,
}

impl Note {
    /// Create a note from its parts
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Whether a heading should be rendered for this note
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// List preview: the first `max_chars` characters of the content plus `...`
    ///
    /// The ellipsis is appended even when nothing was cut off.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.content.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }

    /// Case-insensitive substring match against title or content
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.matches_normalized(&normalize_query(query))
    }

    /// Same as [`Note::matches`] for a query already passed through
    /// [`normalize_query`].
    pub(crate) fn matches_normalized(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(query) || self.content.to_lowercase().contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_id_parse() {
        let id: NoteId = " 42 ".parse().unwrap();
        assert_eq!(id, NoteId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_id_serializes_as_number() {
        let note = Note::new(NoteId::new(3), "A", "body");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"id":3,"title":"A","content":"body"}"#);
    }

    #[test]
    fn test_has_title() {
        assert!(Note::new(NoteId::new(1), "Groceries", "").has_title());
        assert!(!Note::new(NoteId::new(1), "", "milk").has_title());
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let note = Note::new(NoteId::new(1), "", "héllo wörld");
        assert_eq!(note.preview(5), "héllo...");
    }

    #[test]
    fn test_preview_always_appends_ellipsis() {
        let note = Note::new(NoteId::new(1), "", "short");
        assert_eq!(note.preview(100), "short...");

        let blank = Note::new(NoteId::new(2), "", "");
        assert_eq!(blank.preview(100), "...");
    }

    #[test]
    fn test_matches_title_or_content() {
        let note = Note::new(NoteId::new(1), "Groceries", "milk and eggs");
        assert!(note.matches("gro"));
        assert!(note.matches("eggs"));
        assert!(note.matches(""));
        assert!(!note.matches("bread"));
    }

    #[test]
    fn test_matches_ignores_query_case() {
        let note = Note::new(NoteId::new(1), "Groceries", "Milk and EGGS");
        assert!(note.matches("GRO"));
        assert!(note.matches("eggs"));
        assert!(note.matches("mILK"));
    }
}
