//! Domain model for the organizer.
//!
//! # Responsibility
//! - Define the note, settings and advice shapes shared by every component.
//! - Fix their serialized field names in one place.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Advice entries are static reference data and are never persisted.

pub mod advice;
pub mod note;
pub mod settings;
