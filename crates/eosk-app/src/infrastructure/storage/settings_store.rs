//! JSON settings persistence for the on-screen keyboard.
//!
//! `SettingsStore` is the only component that reads or writes `settings.json`.
//! It is constructed once by the composition root and shared as an
//! `Arc<SettingsStore>`; there is no global instance.
//!
//! # Failure policy
//!
//! Nothing here is fatal.  `load` always returns a usable record: when the
//! file is missing, unreadable, empty, or not JSON, the default record is
//! returned and written back so the file heals itself.  `save` logs write
//! failures and keeps the in-memory record authoritative for the rest of the
//! process.
//!
//! # Locking
//!
//! Every load and save runs under one `Mutex`, so calls from different UI
//! handlers never interleave a read with a write.  There is no cross-process
//! lock; two running instances race and the last write wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use eosk_core::{SettingsParseError, SettingsRecord};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::manage_settings::SettingsRepository;

/// File name of the settings document inside the base directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither the executable's directory nor the working directory could be
    /// determined.
    #[error("could not determine the application base directory")]
    NoBaseDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record could not be serialized to JSON.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Lifecycle of the in-memory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    /// Holding defaults; `load` has not run yet.
    Uninitialized,
    /// At least one `load` has completed.
    Loaded,
}

struct StoreState {
    current: SettingsRecord,
    phase: StorePhase,
}

/// Process-wide owner of the settings record and its file.
pub struct SettingsStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl SettingsStore {
    /// A store backed by the file at `path`.  Nothing is read until [`load`].
    ///
    /// [`load`]: SettingsStore::load
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(StoreState {
                current: SettingsRecord::default(),
                phase: StorePhase::Uninitialized,
            }),
        }
    }

    /// A store backed by `settings.json` next to the running executable.
    ///
    /// Falls back to the working directory when the executable path is not
    /// available.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoBaseDir`] if neither directory can be determined.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .ok_or(StoreError::NoBaseDir)?;
        Ok(Self::new(base.join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn phase(&self) -> StorePhase {
        self.lock().phase
    }

    /// Reads the settings file, repairing or replacing it as needed.
    ///
    /// Always re-reads from disk.  The returned record also becomes the
    /// snapshot returned by [`current`].
    ///
    /// [`current`]: SettingsStore::current
    pub fn load(&self) -> SettingsRecord {
        let mut state = self.lock();

        let record = match self.read() {
            Ok(record) => record,
            Err(reason) => {
                warn!(path = %self.path.display(), "{reason}; restoring default settings");
                let defaults = SettingsRecord::default();
                if let Err(e) = self.write(&defaults) {
                    warn!("could not persist default settings: {e}");
                }
                defaults
            }
        };

        state.current = record.clone();
        state.phase = StorePhase::Loaded;
        record
    }

    /// Overwrites the settings file with `record`.
    ///
    /// The record becomes the in-memory snapshot even if the write fails;
    /// write failures are logged and otherwise ignored.
    pub fn save(&self, record: &SettingsRecord) {
        if let Err(e) = self.try_save(record) {
            warn!("settings were not saved: {e}");
        }
    }

    /// Like [`save`], returning the write error to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written, or
    /// [`StoreError::Serialize`] if the record cannot be serialized.
    ///
    /// [`save`]: SettingsStore::save
    pub fn try_save(&self, record: &SettingsRecord) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.current = record.clone();
        self.write(record)
    }

    /// The last loaded or saved record, without touching disk.
    pub fn current(&self) -> SettingsRecord {
        self.lock().current.clone()
    }

    /// Replaces the in-memory record and saves it.
    pub fn update(&self, record: SettingsRecord) {
        self.save(&record);
    }

    /// Applies `change` to the in-memory record and saves the result.
    ///
    /// The lock is held from the read to the end of the write, so changes
    /// from concurrent callers all land.  Write failures are logged like
    /// [`save`].
    ///
    /// [`save`]: SettingsStore::save
    pub fn update_with(&self, change: impl FnOnce(&mut SettingsRecord)) -> SettingsRecord {
        let mut state = self.lock();
        change(&mut state.current);
        let record = state.current.clone();
        if let Err(e) = self.write(&record) {
            warn!("settings were not saved: {e}");
        }
        record
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads and parses the file.  The error is a description for the log.
    fn read(&self) -> Result<SettingsRecord, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err("settings file not found".to_string())
            }
            Err(e) => return Err(format!("settings file unreadable: {e}")),
        };

        match SettingsRecord::from_json_with_repairs(&content) {
            Ok((record, repaired)) => {
                for field in &repaired {
                    debug!("repaired setting: {field}");
                }
                debug!(path = %self.path.display(), "settings loaded");
                Ok(record)
            }
            Err(SettingsParseError::Empty) => Err("settings file is empty".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Writes `record` as indented JSON.  Caller must hold the lock.
    fn write(&self, record: &SettingsRecord) -> Result<(), StoreError> {
        let json = record.to_json_pretty()?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(dir) {
                warn!(dir = %dir.display(), "could not create settings directory: {e}");
            }
        }

        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

impl SettingsRepository for SettingsStore {
    fn current(&self) -> SettingsRecord {
        SettingsStore::current(self)
    }

    fn update(&self, record: SettingsRecord) {
        SettingsStore::update(self, record);
    }

    fn update_with(&self, change: &mut dyn FnMut(&mut SettingsRecord)) -> SettingsRecord {
        SettingsStore::update_with(self, change)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use eosk_core::{ThemeType, DEFAULT_THEME_COLOR};
    use uuid::Uuid;

    /// A unique directory under the system temp dir, removed on drop.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            Self(std::env::temp_dir().join(format!("eosk_test_{}", Uuid::new_v4())))
        }

        fn settings_path(&self) -> PathBuf {
            self.0.join(SETTINGS_FILE_NAME)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            fs::remove_dir_all(&self.0).ok();
        }
    }

    fn read_back(path: &Path) -> SettingsRecord {
        let content = fs::read_to_string(path).expect("file exists");
        SettingsRecord::from_json(&content).expect("file holds valid settings")
    }

    #[test]
    fn test_new_store_is_uninitialized_with_defaults() {
        let dir = TempDir::new();
        let store = SettingsStore::new(dir.settings_path());

        assert_eq!(store.phase(), StorePhase::Uninitialized);
        assert_eq!(store.current(), SettingsRecord::default());
        assert!(!dir.settings_path().exists(), "construction must not touch disk");
    }

    #[test]
    fn test_load_missing_file_creates_it_with_defaults() {
        // Arrange
        let dir = TempDir::new();
        let store = SettingsStore::new(dir.settings_path());

        // Act
        let record = store.load();

        // Assert
        assert_eq!(record, SettingsRecord::default());
        assert_eq!(store.phase(), StorePhase::Loaded);
        assert_eq!(read_back(&dir.settings_path()), SettingsRecord::default());
    }

    #[test]
    fn test_load_empty_file_self_heals() {
        let dir = TempDir::new();
        fs::create_dir_all(&dir.0).expect("mkdir");
        fs::write(dir.settings_path(), "   ").expect("write");
        let store = SettingsStore::new(dir.settings_path());

        let record = store.load();

        assert_eq!(record, SettingsRecord::default());
        assert_eq!(read_back(&dir.settings_path()), SettingsRecord::default());
    }

    #[test]
    fn test_load_repairs_fields_without_rewriting_file() {
        // Arrange
        let dir = TempDir::new();
        fs::create_dir_all(&dir.0).expect("mkdir");
        let original = r#"{ "ThemeColor": "", "ThemeType": "Purple", "Volume": 12 }"#;
        fs::write(dir.settings_path(), original).expect("write");
        let store = SettingsStore::new(dir.settings_path());

        // Act
        let record = store.load();

        // Assert
        assert_eq!(record.theme_color, DEFAULT_THEME_COLOR);
        assert_eq!(record.theme_type, ThemeType::Light);
        assert_eq!(record.volume, 12);
        assert_eq!(fs::read_to_string(dir.settings_path()).expect("read"), original);
    }

    #[test]
    fn test_load_keeps_valid_fields_next_to_wrong_typed_theme_type() {
        // Arrange
        let dir = TempDir::new();
        fs::create_dir_all(&dir.0).expect("mkdir");
        let original = r##"{ "ThemeColor": "#112233", "AutoStart": true, "Volume": 40, "ThemeType": 1 }"##;
        fs::write(dir.settings_path(), original).expect("write");
        let store = SettingsStore::new(dir.settings_path());

        // Act
        let record = store.load();

        // Assert
        assert_eq!(
            record,
            SettingsRecord {
                theme_color: "#112233".to_string(),
                auto_start: true,
                enable_sound: true,
                volume: 40,
                theme_type: ThemeType::Light,
            }
        );
        assert_eq!(fs::read_to_string(dir.settings_path()).expect("read"), original);
    }

    #[test]
    fn test_save_adopts_record_even_when_write_fails() {
        // Arrange: a plain file where the parent directory should be
        let dir = TempDir::new();
        fs::create_dir_all(&dir.0).expect("mkdir");
        let blocker = dir.0.join("blocker");
        fs::write(&blocker, "not a directory").expect("write");
        let store = SettingsStore::new(blocker.join(SETTINGS_FILE_NAME));
        let record = SettingsRecord {
            volume: 55,
            ..SettingsRecord::default()
        };

        // Act
        store.save(&record);

        // Assert
        assert_eq!(store.current(), record);
        assert!(matches!(store.try_save(&record), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_load_with_directory_as_path_falls_back_to_defaults() {
        let dir = TempDir::new();
        fs::create_dir_all(dir.settings_path()).expect("mkdir");
        let store = SettingsStore::new(dir.settings_path());

        let record = store.load();

        assert_eq!(record, SettingsRecord::default());
        assert_eq!(store.phase(), StorePhase::Loaded);
    }

    #[test]
    fn test_load_rereads_external_edits() {
        let dir = TempDir::new();
        let store = SettingsStore::new(dir.settings_path());
        store.load();

        fs::write(dir.settings_path(), r##"{ "ThemeType": "Dark", "ThemeColor": "#112233" }"##)
            .expect("external edit");
        let record = store.load();

        assert_eq!(record.theme_type, ThemeType::Dark);
        assert_eq!(record.theme_color, "#112233");
        assert_eq!(store.current(), record);
    }

    #[test]
    fn test_concurrent_updates_leave_valid_file() {
        use std::sync::Arc;

        // Arrange
        let dir = TempDir::new();
        let store = Arc::new(SettingsStore::new(dir.settings_path()));
        store.load();

        // Act
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for j in 0..10 {
                        store.update(SettingsRecord {
                            volume: i * 10 + j,
                            ..SettingsRecord::default()
                        });
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("writer thread");
        }

        // Assert: the file holds the last snapshot written
        assert_eq!(read_back(&dir.settings_path()), store.current());
    }

    #[test]
    fn test_concurrent_update_with_keeps_every_change() {
        use std::sync::Arc;

        // Arrange
        let dir = TempDir::new();
        let store = Arc::new(SettingsStore::new(dir.settings_path()));

        // Act: each thread bumps the volume; none may overwrite another's bump
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.update_with(|r| r.volume += 1);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("writer thread");
        }

        // Assert
        assert_eq!(store.current().volume, 100);
        assert_eq!(read_back(&dir.settings_path()).volume, 100);
    }

    #[test]
    fn test_at_default_location_uses_settings_file_name() {
        let store = SettingsStore::at_default_location().expect("base dir");
        assert_eq!(
            store.path().file_name().and_then(|n| n.to_str()),
            Some(SETTINGS_FILE_NAME)
        );
    }
}
