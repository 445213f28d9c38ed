//! Case-insensitive substring filter over notes.
//!
//! # Invariants
//! - A note matches when its title, content, or any tag contains the query.
//! - Output keeps input order and never contains notes absent from the input.
//! - An empty query returns the input unchanged.
//! - Filtering has no side effects.

use crate::model::note::Note;

/// Returns the notes matching `query`, in input order.
///
/// The query is compared as-is (no trimming); surrounding whitespace is part
/// of the needle.
pub fn filter_notes(query: &str, notes: &[Note]) -> Vec<Note> {
    if query.is_empty() {
        return notes.to_vec();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note_matches(note, needle.as_str()))
        .cloned()
        .collect()
}

/// Checks one note against an already-lowercased needle.
pub fn note_matches(note: &Note, needle_lower: &str) -> bool {
    contains_folded(&note.title, needle_lower)
        || contains_folded(&note.content, needle_lower)
        || note
            .tags
            .iter()
            .any(|tag| contains_folded(tag, needle_lower))
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::filter_notes;
    use crate::model::note::Note;

    fn note(id: &str, title: &str, content: &str, tags: &[&str]) -> Note {
        Note::with_id(
            id,
            title,
            content,
            tags.iter().map(|tag| tag.to_string()).collect(),
            0,
        )
        .unwrap()
    }

    fn fixtures() -> Vec<Note> {
        vec![
            note("a", "Идеи для выходных", "кофейня", &["планы"]),
            note("b", "Shopping", "Milk and BREAD", &[]),
            note("c", "Work", "standup", &["Office", "weekly"]),
        ]
    }

    #[test]
    fn empty_query_returns_input_unchanged() {
        let notes = fixtures();
        assert_eq!(filter_notes("", &notes), notes);
    }

    #[test]
    fn matches_each_field_case_insensitively() {
        let notes = fixtures();
        let ids = |query: &str| -> Vec<String> {
            filter_notes(query, &notes)
                .into_iter()
                .map(|n| n.id)
                .collect()
        };

        assert_eq!(ids("ИДЕИ"), vec!["a"]);
        assert_eq!(ids("bread"), vec!["b"]);
        assert_eq!(ids("office"), vec!["c"]);
        assert_eq!(ids("планы"), vec!["a"]);
    }

    #[test]
    fn keeps_input_order_and_returns_empty_on_miss() {
        let notes = fixtures();
        let hits: Vec<String> = filter_notes("o", &notes).into_iter().map(|n| n.id).collect();
        assert_eq!(hits, vec!["b", "c"]);
        assert!(filter_notes("zzz", &notes).is_empty());
    }
}
