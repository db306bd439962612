//! Search functionality for NoteBoard
//!
//! Live filtering of the note list by a free-text query. Matching is a
//! case-insensitive substring test against each note's title and content;
//! the filter never reorders notes.

use crate::models::Note;

/// Lower-case a raw search query for matching.
///
/// Whitespace is kept as typed: `" milk"` only matches text containing a
/// space before `milk`.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Lazily filter `notes` down to those matching `query`, in original order.
///
/// The returned iterator is `Clone`, so callers can walk the result more
/// than once without re-running the normalization.
pub fn filter_notes<'a>(
    notes: &'a [Note],
    query: &str,
) -> impl Iterator<Item = &'a Note> + Clone + 'a {
    let query = normalize_query(query);
    notes.iter().filter(move |note| note.matches_normalized(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;
    use pretty_assertions::assert_eq;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new(NoteId::new(1), "Groceries", "milk, eggs"),
            Note::new(NoteId::new(2), "", "Call the plumber"),
            Note::new(NoteId::new(3), "Work", "Quarterly groceries budget"),
        ]
    }

    fn ids<'a>(notes: impl Iterator<Item = &'a Note>) -> Vec<u64> {
        notes.map(|note| note.id.get()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let notes = sample_notes();
        assert_eq!(ids(filter_notes(&notes, "")), vec![1, 2, 3]);
    }

    #[test]
    fn matches_case_insensitively_in_order() {
        let notes = sample_notes();
        assert_eq!(ids(filter_notes(&notes, "gro")), vec![1, 3]);
        assert_eq!(ids(filter_notes(&notes, "GRO")), vec![1, 3]);
    }

    #[test]
    fn matches_content_when_title_is_empty() {
        let notes = sample_notes();
        assert_eq!(ids(filter_notes(&notes, "plumber")), vec![2]);
    }

    #[test]
    fn query_whitespace_is_significant() {
        let notes = sample_notes();
        assert_eq!(ids(filter_notes(&notes, " eggs")), vec![1]);
        assert!(filter_notes(&notes, "  eggs").next().is_none());
    }

    #[test]
    fn filtered_iterator_is_restartable() {
        let notes = sample_notes();
        let visible = filter_notes(&notes, "work");
        let first_pass = ids(visible.clone());
        let second_pass = ids(visible);
        assert_eq!(first_pass, vec![3]);
        assert_eq!(first_pass, second_pass);
    }
}
