//! Note collection persistence.
//!
//! # Responsibility
//! - Create/delete notes against a caller-owned collection.
//! - Persist the whole collection as one JSON value under `keys::NOTES`.
//! - Bootstrap the seed collection on first run.
//!
//! # Invariants
//! - New notes are prepended (most recently created first).
//! - Ids are unique within the collection returned by `create`.
//! - Tags are trimmed, empties dropped; duplicates and case are kept.
//! - A rejected `create` performs no write.

use crate::model::note::{Note, NoteId};
use crate::repo::RepoResult;
use crate::search::filter::filter_notes;
use crate::store::{keys, read_json, PersistentStore};
use log::{error, info};
use uuid::Uuid;

const SEED_FIRST_AGE_MS: i64 = 86_400_000;
const SEED_SECOND_AGE_MS: i64 = 43_200_000;

/// Stateless repository for the note collection.
pub struct NoteRepository<'store, S: PersistentStore + ?Sized> {
    store: &'store mut S,
}

impl<'store, S: PersistentStore + ?Sized> NoteRepository<'store, S> {
    pub fn new(store: &'store mut S) -> Self {
        Self { store }
    }

    /// Loads the persisted collection, seeding it on first run.
    ///
    /// Absent or unreadable data is treated as a first run: the seed notes are
    /// returned and written back. A failed seed write is logged; the seed is
    /// still returned so the session can start.
    pub fn load(&mut self, now_ms: i64) -> Vec<Note> {
        if let Some(notes) = read_json::<Vec<Note>, S>(&*self.store, keys::NOTES) {
            info!(
                "event=notes_load module=repo status=ok source=store count={}",
                notes.len()
            );
            return notes;
        }

        let seed = seed_notes(now_ms);
        match self.persist(&seed) {
            Ok(()) => info!(
                "event=notes_load module=repo status=ok source=seed count={}",
                seed.len()
            ),
            Err(err) => error!(
                "event=notes_load module=repo status=error source=seed error_code=seed_write_failed error={}",
                err
            ),
        }
        seed
    }

    /// Validates input, prepends a new note and persists the collection.
    ///
    /// Returns the new collection and the created note.
    pub fn create(
        &mut self,
        notes: &[Note],
        title: &str,
        content: &str,
        tags_raw: &str,
        now_ms: i64,
    ) -> RepoResult<(Vec<Note>, Note)> {
        let mut note = Note::new(title, content, parse_tags(tags_raw), now_ms)?;
        while notes.iter().any(|existing| existing.id == note.id) {
            note.id = Uuid::new_v4().to_string();
        }

        let mut updated = Vec::with_capacity(notes.len() + 1);
        updated.push(note.clone());
        updated.extend_from_slice(notes);
        self.persist(&updated)?;

        info!(
            "event=note_create module=repo status=ok tags={} count={}",
            note.tags.len(),
            updated.len()
        );
        Ok((updated, note))
    }

    /// Removes the note with `id` and persists the collection.
    ///
    /// Unknown ids are not an error; the unchanged collection is persisted.
    pub fn delete(&mut self, notes: &[Note], id: &str) -> RepoResult<Vec<Note>> {
        let updated: Vec<Note> = notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        self.persist(&updated)?;

        info!(
            "event=note_delete module=repo status=ok removed={} count={}",
            notes.len() - updated.len(),
            updated.len()
        );
        Ok(updated)
    }

    fn persist(&mut self, notes: &[Note]) -> RepoResult<()> {
        let serialized = serde_json::to_string(notes)?;
        self.store.set(keys::NOTES, &serialized)?;
        Ok(())
    }
}

/// Filters notes by free text; see [`filter_notes`].
///
/// Pure: reads nothing from and writes nothing to the store.
pub fn search(query: &str, notes: &[Note]) -> Vec<Note> {
    filter_notes(query, notes)
}

/// Pretty-printed JSON for the export file.
pub fn export_json(notes: &[Note]) -> RepoResult<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

/// Splits comma-separated tag input.
///
/// Each entry is trimmed and empty entries are dropped. Order, case and
/// duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Demo notes written on first run.
pub fn seed_notes(now_ms: i64) -> Vec<Note> {
    let first_at = now_ms - SEED_FIRST_AGE_MS;
    let second_at = now_ms - SEED_SECOND_AGE_MS;
    vec![
        Note {
            id: NoteId::from("1"),
            title: "Мои мысли о сегодняшнем дне".to_string(),
            content: "Сегодня был чудесный день! Прогулялась в парке, почитала любимую книгу."
                .to_string(),
            tags: vec!["настроение".to_string(), "день".to_string()],
            created_at: first_at,
            updated_at: first_at,
        },
        Note {
            id: NoteId::from("2"),
            title: "Идеи для выходных".to_string(),
            content: "Посетить новую кофейню, сходить на выставку, встретиться с друзьями."
                .to_string(),
            tags: vec!["планы".to_string(), "выходные".to_string()],
            created_at: second_at,
            updated_at: second_at,
        },
    ]
}
