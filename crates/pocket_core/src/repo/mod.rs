//! Repository layer over the local persistent medium.
//!
//! # Responsibility
//! - Translate whole domain values to and from stored JSON text.
//! - Keep key names and serialization details out of the session facade.
//!
//! # Invariants
//! - Repositories hold no domain state of their own; callers pass the current
//!   collection in and receive the new one back.
//! - Every write replaces the whole value under one key.
//! - Validation happens before any write, so a rejected call writes nothing.

use crate::model::note::NoteValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod settings_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for write paths.
///
/// Read paths are soft and never produce this error.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize value: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
