//! Persisted light/dark preference.
//!
//! A single key/value flag survives between runs. [`ThemePreference`] speaks
//! [`ThemeMode`]; the stored string only exists below the
//! [`PreferenceStore`] boundary.
//!
//! Structure:
//! - Pure functions: default path, [`toggle`]
//! - Effect functions: store reads/writes, [`apply`] to a surface

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::surface::{PresentationSurface, LIGHT_MODE_FLAG};
use crate::types::{PreferenceConfig, ThemeMode};

/// Key the theme flag is stored under.
pub const THEME_KEY: &str = "theme";

/// Preference filename within the config directory.
const PREFERENCES_FILENAME: &str = "preferences.json";

// ============================================================================
// ERRORS
// ============================================================================

/// Failure inside a preference store.
///
/// Callers of [`ThemePreference`] never see these: reads fall back to the
/// default and writes are best-effort.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid preference file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// STORES
// ============================================================================

/// Durable string key/value storage.
pub trait PreferenceStore {
    /// Value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, leaving other keys alone.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Returns the default preference file.
///
/// On Linux: ~/.config/folio/preferences.json
pub fn default_preference_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join(PREFERENCES_FILENAME))
}

/// JSON object of string keys to string values on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured path, or the platform default when unset.
    ///
    /// Returns `None` when no path is configured and the platform has no
    /// config directory.
    pub fn from_config(config: &PreferenceConfig) -> Option<Self> {
        if config.path.as_os_str().is_empty() {
            default_preference_path().map(Self::new)
        } else {
            Some(Self::new(&config.path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let contents = serde_json::to_string_pretty(map).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, contents).map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "discarding unreadable preference file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

/// In-process store. Forgets everything on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

// ============================================================================
// THEME PREFERENCE
// ============================================================================

/// The opposite mode.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    current.toggled()
}

/// Reflect `mode` on the page: the light-mode flag plus the toggle icon.
pub fn apply<P: PresentationSurface + ?Sized>(surface: &mut P, mode: ThemeMode) {
    surface.set_flag(LIGHT_MODE_FLAG, mode == ThemeMode::Light);
    surface.select_icon(mode.icon());
}

/// Reads and writes the theme flag through a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored mode. Light only if the stored value is exactly `"light"`;
    /// dark when absent or unreadable.
    pub fn load(&self) -> ThemeMode {
        match self.store.get(THEME_KEY) {
            Ok(value) => ThemeMode::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable, using default");
                ThemeMode::default()
            }
        }
    }

    /// Persist `mode`. Failures are logged and dropped; the caller's
    /// in-memory mode stays correct for the current run.
    pub fn store(&mut self, mode: ThemeMode) {
        match self.store.set(THEME_KEY, mode.as_str()) {
            Ok(()) => tracing::debug!(theme = %mode, "theme preference saved"),
            Err(e) => tracing::warn!(error = %e, "theme preference not saved"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::tests::RecordingSurface;
    use crate::types::ThemeIcon;
    use tempfile::TempDir;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                path: PathBuf::from("/nowhere"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: PathBuf::from("/nowhere"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    /// Raw value under the theme key, read past the preference wrapper.
    fn stored<S: PreferenceStore>(pref: &ThemePreference<S>) -> Option<String> {
        pref.store.get(THEME_KEY).unwrap()
    }

    // --- Pure function tests ---

    #[test]
    fn default_preference_path_is_reasonable() {
        if let Some(path) = default_preference_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("folio"));
            assert!(path_str.ends_with("preferences.json"));
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let once = toggle(mode);
            assert_ne!(once, mode);
            assert_eq!(toggle(once), mode);
        }
    }

    // --- Memory store tests ---

    #[test]
    fn load_without_stored_value_is_dark() {
        let pref = ThemePreference::new(MemoryStore::default());
        assert_eq!(pref.load(), ThemeMode::Dark);
    }

    #[test]
    fn load_after_store_returns_stored_mode() {
        let mut pref = ThemePreference::new(MemoryStore::default());
        pref.store(ThemeMode::Light);
        assert_eq!(pref.load(), ThemeMode::Light);
        pref.store(ThemeMode::Dark);
        assert_eq!(pref.load(), ThemeMode::Dark);
    }

    #[test]
    fn store_writes_literal_strings() {
        let mut pref = ThemePreference::new(MemoryStore::default());
        pref.store(ThemeMode::Light);
        assert_eq!(stored(&pref).as_deref(), Some("light"));
        pref.store(ThemeMode::Dark);
        assert_eq!(stored(&pref).as_deref(), Some("dark"));
    }

    #[test]
    fn store_over_unknown_value_rewrites_as_dark() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "blue").unwrap();
        let mut pref = ThemePreference::new(store);

        let loaded = pref.load();
        pref.store(loaded);
        assert_eq!(stored(&pref).as_deref(), Some("dark"));
    }

    #[test]
    fn store_of_load_is_idempotent() {
        for initial in [ThemeMode::Light, ThemeMode::Dark] {
            let mut pref = ThemePreference::new(MemoryStore::default());
            pref.store(initial);
            let before = stored(&pref);

            let loaded = pref.load();
            pref.store(loaded);

            assert_eq!(stored(&pref), before);
        }
    }

    #[test]
    fn unrecognized_stored_value_loads_as_dark() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemePreference::new(store).load(), ThemeMode::Dark);
    }

    #[test]
    fn broken_store_never_fails_the_caller() {
        let mut pref = ThemePreference::new(BrokenStore);
        assert_eq!(pref.load(), ThemeMode::Dark);
        pref.store(ThemeMode::Light);
        assert_eq!(pref.load(), ThemeMode::Dark);
    }

    // --- Apply tests ---

    #[test]
    fn apply_light_sets_flag_and_moon_icon() {
        let mut surface = RecordingSurface::default();
        apply(&mut surface, ThemeMode::Light);
        assert_eq!(surface.flags.get(LIGHT_MODE_FLAG), Some(&true));
        assert_eq!(surface.icon, Some(ThemeIcon::Moon));
    }

    #[test]
    fn apply_dark_clears_flag_and_shows_sun() {
        let mut surface = RecordingSurface::default();
        apply(&mut surface, ThemeMode::Light);
        apply(&mut surface, ThemeMode::Dark);
        assert_eq!(surface.flags.get(LIGHT_MODE_FLAG), Some(&false));
        assert_eq!(surface.icon, Some(ThemeIcon::Sun));
    }

    // --- File store tests ---

    #[test]
    fn file_store_missing_file_reads_as_absent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("prefs.json"));
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_round_trips_theme() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("prefs.json");

        let mut pref = ThemePreference::new(FileStore::new(&path));
        pref.store(ThemeMode::Light);
        assert!(path.exists());

        // A fresh store on the same file sees the value.
        let reopened = ThemePreference::new(FileStore::new(&path));
        assert_eq!(reopened.load(), ThemeMode::Light);
    }

    #[test]
    fn file_store_preserves_other_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, r#"{"font": "serif"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set(THEME_KEY, "light").unwrap();

        assert_eq!(store.get("font").unwrap().as_deref(), Some("serif"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn file_store_corrupt_file_loads_as_dark() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get(THEME_KEY), Err(StoreError::Corrupt { .. })));
        assert_eq!(ThemePreference::new(store).load(), ThemeMode::Dark);
    }

    #[test]
    fn file_store_overwrites_corrupt_file_on_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "{{{").unwrap();

        let mut pref = ThemePreference::new(FileStore::new(&path));
        pref.store(ThemeMode::Light);
        assert_eq!(pref.load(), ThemeMode::Light);
    }

    #[test]
    fn file_store_from_config_prefers_explicit_path() {
        let config = PreferenceConfig {
            path: PathBuf::from("/tmp/custom.json"),
        };
        let store = FileStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/custom.json"));
    }
}
