//! Note domain model.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another note.
//! - `title` and `content` are non-empty after trimming.
//! - `tags` keep caller order and duplicates.
//! - `created_at <= updated_at`; no edit path exists, so they are equal.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque note identifier.
///
/// Plain text so that legacy ids such as `"1"` keep decoding.
pub type NoteId = String;

/// One free-text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

/// Rejection reasons for note input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyContent => write!(f, "note content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a note with a freshly generated id.
    ///
    /// `title` and `content` are trimmed; both must be non-empty afterwards.
    pub fn new(
        title: &str,
        content: &str,
        tags: Vec<String>,
        now_ms: i64,
    ) -> Result<Self, NoteValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), title, content, tags, now_ms)
    }

    /// Creates a note with a caller-provided id (seed data, fixtures).
    pub fn with_id(
        id: impl Into<NoteId>,
        title: &str,
        content: &str,
        tags: Vec<String>,
        created_at: i64,
    ) -> Result<Self, NoteValidationError> {
        if title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }

        Ok(Self {
            id: id.into(),
            title: title.to_string(),
            content: content.to_string(),
            tags,
            created_at,
            updated_at: created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteValidationError};

    #[test]
    fn new_keeps_text_as_typed_and_stamps_both_timestamps() {
        let note = Note::new("  title ", " body\n", vec!["a".to_string()], 42).unwrap();
        assert_eq!(note.title, "  title ");
        assert_eq!(note.content, " body\n");
        assert_eq!(note.created_at, 42);
        assert_eq!(note.updated_at, 42);
        assert!(!note.id.is_empty());
    }

    #[test]
    fn new_rejects_blank_title_before_content() {
        assert_eq!(
            Note::new("  ", "", Vec::new(), 0).unwrap_err(),
            NoteValidationError::EmptyTitle
        );
        assert_eq!(
            Note::new("t", " \t", Vec::new(), 0).unwrap_err(),
            NoteValidationError::EmptyContent
        );
    }

    #[test]
    fn serializes_with_camel_case_timestamps() {
        let note = Note::with_id("1", "t", "c", vec!["x".to_string()], 7).unwrap();
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["createdAt"], 7);
        assert_eq!(json["updatedAt"], 7);
        assert_eq!(json["tags"][0], "x");
    }
}
