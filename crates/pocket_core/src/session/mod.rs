//! Session facade: the single entry point for the presentation layer.
//!
//! # Responsibility
//! - Bootstrap notes, settings, playlist and score from the local store once
//!   per session start.
//! - Own the in-memory copy of all user state.
//! - Expose read accessors and mutators that persist before returning.
//!
//! # Invariants
//! - Every durable change is written synchronously, one whole value per key,
//!   before the mutator returns.
//! - In-memory state changes only after the write succeeded, so a failed
//!   mutator leaves both views as they were.
//! - Bootstrap never fails: unreadable data falls back to seed/defaults.

use crate::clock::{Clock, SystemClock};
use crate::model::advice::{AdviceEntry, TimeOfDay, ADVICE_CATALOG};
use crate::model::note::{Note, NoteValidationError};
use crate::model::settings::Settings;
use crate::repo::note_repo::{self, NoteRepository};
use crate::repo::settings_repo::{self, SettingsStore};
use crate::repo::RepoError;
use crate::selector::{self, ScoreOutcome, EMOTION_ANSWER, EMOTION_INCREMENT};
use crate::store::{keys, read_raw, PersistentStore, StoreError};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod export;
pub mod navigation;

use navigation::Tab;

/// Title given to a draft built from the current advice.
pub const ADVICE_NOTE_TITLE: &str = "Совет дня";

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure of a session mutator.
#[derive(Debug)]
pub enum SessionError {
    /// Input rejected; nothing was written.
    Validation(NoteValidationError),
    /// Serialization failure while preparing a write.
    Repo(RepoError),
    /// Local medium refused the write.
    Store(StoreError),
    /// Export file could not be written.
    Export(std::io::Error),
}

impl SessionError {
    /// `true` when the user input was rejected, as opposed to a storage fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "export failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::Store(err) => Self::Store(err),
            other => Self::Repo(other),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Export(value)
    }
}

/// Unsaved note form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    /// Raw comma-separated tag input.
    pub tags: String,
}

/// Figures for the home view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSummary {
    pub note_count: usize,
    /// Title of the most recently created note.
    pub latest_title: Option<String>,
}

/// Owned state of one organizer session.
pub struct Session<S: PersistentStore, C: Clock = SystemClock, R: Rng = StdRng> {
    store: S,
    clock: C,
    rng: R,
    time_of_day: TimeOfDay,
    notes: Vec<Note>,
    settings: Settings,
    playlist: String,
    score: u32,
    current_advice: Option<AdviceEntry>,
    draft: NoteDraft,
    active_tab: Tab,
}

impl<S: PersistentStore, C: Clock> Session<S, C, StdRng> {
    /// Starts a session with an entropy-seeded random source.
    pub fn bootstrap(store: S, clock: C) -> Self {
        Self::bootstrap_with_rng(store, clock, StdRng::from_entropy())
    }
}

impl<S: PersistentStore, C: Clock, R: Rng> Session<S, C, R> {
    /// Starts a session with a caller-provided random source.
    ///
    /// Order: greeting bucket, notes (seeding on first run), settings,
    /// playlist, score.
    pub fn bootstrap_with_rng(mut store: S, clock: C, rng: R) -> Self {
        let time_of_day = selector::time_of_day(clock.local_hour());
        let notes = NoteRepository::new(&mut store).load(clock.now_ms());
        let settings = SettingsStore::new(&mut store).load();
        let playlist = read_raw(&store, keys::PLAYLIST).unwrap_or_default();
        let score = load_score(&store);

        info!(
            "event=session_bootstrap module=session status=ok time_of_day={} notes={} theme={} score={} playlist_set={}",
            time_of_day.as_str(),
            notes.len(),
            settings.theme.as_str(),
            score,
            !playlist.is_empty()
        );

        Self {
            store,
            clock,
            rng,
            time_of_day,
            notes,
            settings,
            playlist,
            score,
            current_advice: None,
            draft: NoteDraft::default(),
            active_tab: Tab::default(),
        }
    }

    /// Notes, most recently created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes matching `query` in title, content or tags.
    pub fn search(&self, query: &str) -> Vec<Note> {
        note_repo::search(query, &self.notes)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Time bucket fixed at bootstrap.
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// Greeting line for the bootstrap time bucket.
    pub fn greeting(&self) -> &'static str {
        selector::greeting(self.time_of_day)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Saved playlist reference; empty when none was saved.
    pub fn playlist(&self) -> &str {
        &self.playlist
    }

    pub fn current_advice(&self) -> Option<&AdviceEntry> {
        self.current_advice.as_ref()
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn summary(&self) -> HomeSummary {
        HomeSummary {
            note_count: self.notes.len(),
            latest_title: self.notes.first().map(|note| note.title.clone()),
        }
    }

    /// Read-only access to the underlying medium.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ends the session and hands the medium back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Creates and persists a note, returning it.
    pub fn create_note(
        &mut self,
        title: &str,
        content: &str,
        tags_raw: &str,
    ) -> SessionResult<Note> {
        let now_ms = self.clock.now_ms();
        let mut repo = NoteRepository::new(&mut self.store);
        let (notes, created) = repo.create(&self.notes, title, content, tags_raw, now_ms)?;
        self.notes = notes;
        Ok(created)
    }

    /// Creates a note from the current draft and clears the draft on success.
    pub fn create_note_from_draft(&mut self) -> SessionResult<Note> {
        let NoteDraft {
            title,
            content,
            tags,
        } = self.draft.clone();
        let created = self.create_note(&title, &content, &tags)?;
        self.draft = NoteDraft::default();
        Ok(created)
    }

    /// Deletes a note by id. Unknown ids are a no-op.
    pub fn delete_note(&mut self, id: &str) -> SessionResult<()> {
        self.notes = NoteRepository::new(&mut self.store).delete(&self.notes, id)?;
        Ok(())
    }

    /// Flips the theme, persists and returns the new settings.
    pub fn toggle_theme(&mut self) -> SessionResult<Settings> {
        let next = settings_repo::toggle_theme(&self.settings);
        self.replace_settings(next)
    }

    /// Renames the user, persists and returns the new settings.
    pub fn set_username(&mut self, username: &str) -> SessionResult<Settings> {
        let next = settings_repo::with_username(&self.settings, username);
        self.replace_settings(next)
    }

    /// Stores the playlist reference verbatim.
    pub fn save_playlist(&mut self, reference: &str) -> SessionResult<()> {
        self.store.set(keys::PLAYLIST, reference)?;
        self.playlist = reference.to_string();
        info!(
            "event=playlist_save module=session status=ok empty={}",
            reference.is_empty()
        );
        Ok(())
    }

    /// Scores an emotion-game answer; the score is persisted only when it grows.
    pub fn answer_emotion(&mut self, submitted: &str) -> SessionResult<ScoreOutcome> {
        let outcome =
            selector::score_answer(submitted, EMOTION_ANSWER, self.score, EMOTION_INCREMENT);
        if outcome.new_score != self.score {
            self.store.set(keys::SCORE, &outcome.new_score.to_string())?;
            self.score = outcome.new_score;
        }
        Ok(outcome)
    }

    /// Checks an association-game word. Nothing is persisted.
    pub fn answer_association(&self, word: &str) -> bool {
        selector::check_association(word)
    }

    /// Picks fresh advice for the current hour and remembers it.
    pub fn next_advice(&mut self) -> Option<AdviceEntry> {
        let hour = self.clock.local_hour();
        let picked = selector::pick_advice(ADVICE_CATALOG, hour, &mut self.rng).copied();
        self.current_advice = picked;
        picked
    }

    /// Copies the current advice into the note draft and moves to the notes
    /// tab. Returns `None` (and changes nothing) when no advice is shown.
    pub fn advice_to_draft(&mut self) -> Option<Tab> {
        let advice = self.current_advice?;
        self.draft.title = ADVICE_NOTE_TITLE.to_string();
        self.draft.content = advice.text.to_string();
        Some(self.navigate(Tab::Notes))
    }

    /// Replaces the draft fields.
    pub fn update_draft(&mut self, title: &str, content: &str, tags: &str) -> &NoteDraft {
        self.draft = NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.to_string(),
        };
        &self.draft
    }

    /// Switches the active tab and returns it.
    pub fn navigate(&mut self, tab: Tab) -> Tab {
        self.active_tab = tab;
        tab
    }

    /// Writes the notes export into `dir` and returns the file path.
    pub fn export_notes(&self, dir: &Path) -> SessionResult<PathBuf> {
        export::write_export(dir, &self.notes)
    }

    fn replace_settings(&mut self, next: Settings) -> SessionResult<Settings> {
        SettingsStore::new(&mut self.store).save(&next)?;
        self.settings = next.clone();
        Ok(next)
    }
}

fn load_score<S: PersistentStore + ?Sized>(store: &S) -> u32 {
    let Some(raw) = read_raw(store, keys::SCORE) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(score) => score,
        Err(err) => {
            warn!(
                "event=score_load module=session status=soft_fail reason=malformed error={}",
                err
            );
            0
        }
    }
}
