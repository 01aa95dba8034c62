// SPDX-License-Identifier: MPL-2.0
//! Preference persistence for the user's language and theme selections.
//!
//! The store keeps a single flat `preferences.toml` document of raw string
//! values under fixed namespace keys, mirroring the two key-value pairs the
//! site keeps in browser-local storage. Values carry no version tag.
//!
//! Storage must never fail outward: when the underlying directory is
//! unavailable or the document is unreadable, `load` reports the value as
//! absent and `save` is a silent no-op. The rest of the system works with
//! persistence fully disabled and simply reverts to the configured defaults
//! every session.
//!
//! # Path Resolution
//!
//! The preference directory is resolved in priority order:
//! 1. Explicit directory override (for tests)
//! 2. `CLINIC_CORE_CONFIG_DIR` environment variable (if set and non-empty)
//! 3. Platform config directory via the `dirs` crate, with the app name
//!    appended

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Namespace key for the persisted language selection.
pub const PREF_LANGUAGE: &str = "clinic-language";

/// Namespace key for the persisted theme selection.
pub const PREF_THEME: &str = "clinic-theme";

/// Environment variable to override the preference directory.
pub const ENV_CONFIG_DIR: &str = "CLINIC_CORE_CONFIG_DIR";

/// Application name used for directory naming.
const APP_NAME: &str = "ClinicCore";

/// Preference document name within the config directory.
const PREFS_FILE: &str = "preferences.toml";

/// Key-value store over one TOML document in the platform config directory.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: Option<PathBuf>,
}

impl PreferenceStore {
    /// Opens the store at the default platform location.
    pub fn new() -> Self {
        Self {
            dir: resolve_config_dir(),
        }
    }

    /// Opens the store over an explicit directory. For tests and portable
    /// deployments.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    /// A store with no backing directory: `load` always reports absent and
    /// `save` does nothing. Models storage disabled by user or policy.
    pub fn unavailable() -> Self {
        Self { dir: None }
    }

    /// Returns the value stored under `key`, or `None` when the key has
    /// never been written or storage is unreadable.
    pub fn load(&self, key: &str) -> Option<String> {
        let path = self.prefs_path()?;
        let content = fs::read_to_string(path).ok()?;
        let document: HashMap<String, String> = toml::from_str(&content).ok()?;
        document.get(key).cloned()
    }

    /// Writes `value` under `key`. Failures are swallowed; the in-memory
    /// selection state remains authoritative for the session either way.
    pub fn save(&self, key: &str, value: &str) {
        let Some(path) = self.prefs_path() else {
            return;
        };

        let mut document: HashMap<String, String> = path
            .exists()
            .then(|| fs::read_to_string(&path).ok())
            .flatten()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();
        document.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(content) = toml::to_string_pretty(&document) {
            let _ = fs::write(&path, content);
        }
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(PREFS_FILE))
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_config_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceStore::with_dir(temp_dir.path().to_path_buf());

        store.save(PREF_LANGUAGE, "te");
        assert_eq!(store.load(PREF_LANGUAGE), Some("te".to_string()));
    }

    #[test]
    fn load_from_fresh_namespace_is_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceStore::with_dir(temp_dir.path().to_path_buf());

        assert_eq!(store.load(PREF_THEME), None);
    }

    #[test]
    fn namespaces_are_independent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceStore::with_dir(temp_dir.path().to_path_buf());

        store.save(PREF_LANGUAGE, "hi");
        store.save(PREF_THEME, "royal-care");

        assert_eq!(store.load(PREF_LANGUAGE), Some("hi".to_string()));
        assert_eq!(store.load(PREF_THEME), Some("royal-care".to_string()));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceStore::with_dir(temp_dir.path().to_path_buf());

        store.save(PREF_THEME, "trust-light");
        store.save(PREF_THEME, "healing-green");
        assert_eq!(store.load(PREF_THEME), Some("healing-green".to_string()));
    }

    #[test]
    fn unavailable_store_loads_absent_and_saves_silently() {
        let store = PreferenceStore::unavailable();
        store.save(PREF_LANGUAGE, "te");
        assert_eq!(store.load(PREF_LANGUAGE), None);
    }

    #[test]
    fn corrupt_document_reads_as_absent_and_stays_writable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = PreferenceStore::with_dir(temp_dir.path().to_path_buf());
        fs::write(temp_dir.path().join(PREFS_FILE), "not = valid = toml")
            .expect("failed to write corrupt document");

        assert_eq!(store.load(PREF_LANGUAGE), None);

        // A later save replaces the corrupt document.
        store.save(PREF_LANGUAGE, "en");
        assert_eq!(store.load(PREF_LANGUAGE), Some("en".to_string()));
    }

    #[test]
    fn save_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");
        let store = PreferenceStore::with_dir(nested.clone());

        store.save(PREF_THEME, "trust-light");
        assert!(nested.join(PREFS_FILE).exists());
    }
}
