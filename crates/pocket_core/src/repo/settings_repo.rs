//! Settings persistence.
//!
//! # Invariants
//! - Settings are always written whole under `keys::SETTINGS`.
//! - Missing or malformed settings load as `Settings::default()`.
//! - `toggle_theme` and `with_username` are pure; callers persist the result.

use crate::model::settings::Settings;
use crate::repo::RepoResult;
use crate::store::{keys, read_json, PersistentStore};
use log::info;

/// Stateless load/save wrapper for [`Settings`].
pub struct SettingsStore<'store, S: PersistentStore + ?Sized> {
    store: &'store mut S,
}

impl<'store, S: PersistentStore + ?Sized> SettingsStore<'store, S> {
    pub fn new(store: &'store mut S) -> Self {
        Self { store }
    }

    /// Returns persisted settings or defaults.
    pub fn load(&self) -> Settings {
        read_json::<Settings, S>(&*self.store, keys::SETTINGS).unwrap_or_default()
    }

    /// Serializes and persists the full settings object.
    pub fn save(&mut self, settings: &Settings) -> RepoResult<()> {
        let serialized = serde_json::to_string(settings)?;
        self.store.set(keys::SETTINGS, &serialized)?;
        info!(
            "event=settings_save module=repo status=ok theme={}",
            settings.theme.as_str()
        );
        Ok(())
    }
}

/// Flips light/dark, keeping every other field.
pub fn toggle_theme(current: &Settings) -> Settings {
    Settings {
        theme: current.theme.flipped(),
        ..current.clone()
    }
}

/// Replaces the display name, keeping every other field.
///
/// The name is stored as typed; an empty name is allowed.
pub fn with_username(current: &Settings, username: &str) -> Settings {
    Settings {
        username: username.to_string(),
        ..current.clone()
    }
}
