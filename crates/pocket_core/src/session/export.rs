//! Notes export to a fixed-name JSON file.
//!
//! # Invariants
//! - The file name is always [`EXPORT_FILE_NAME`].
//! - Content is the pretty-printed notes collection; there is no import path.

use crate::model::note::Note;
use crate::repo::note_repo::export_json;
use crate::session::SessionResult;
use log::info;
use std::path::{Path, PathBuf};

/// File name of the notes export.
pub const EXPORT_FILE_NAME: &str = "katya-notes.json";

/// Writes `notes` to `<dir>/katya-notes.json`, replacing any previous export.
///
/// Creates `dir` when missing. Returns the written path.
pub fn write_export(dir: &Path, notes: &[Note]) -> SessionResult<PathBuf> {
    let body = export_json(notes)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, body)?;
    info!(
        "event=notes_export module=session status=ok count={} path={}",
        notes.len(),
        path.display()
    );
    Ok(path)
}
