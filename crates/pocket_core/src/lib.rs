//! Core state layer for the Pocket organizer.
//! This crate is the single source of truth for note, settings, score and
//! advice invariants; presentation layers only call into [`Session`].

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod selector;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::advice::{AdviceEntry, TimeOfDay, ADVICE_CATALOG};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use model::settings::{Settings, Theme, DEFAULT_USERNAME};
pub use repo::note_repo::{parse_tags, seed_notes, NoteRepository};
pub use repo::settings_repo::SettingsStore;
pub use repo::{RepoError, RepoResult};
pub use selector::{
    check_association, pick_advice, score_answer, ScoreOutcome, ASSOCIATION_WORDS,
    EMOTION_CHOICES,
};
pub use session::export::EXPORT_FILE_NAME;
pub use session::navigation::Tab;
pub use session::{HomeSummary, NoteDraft, Session, SessionError, SessionResult};
pub use store::{keys, MemoryStore, PersistentStore, SqliteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
