//! High score persistence.
//!
//! The store keeps exactly one integer: the best score seen on this machine.
//! It is read once at startup and written whenever a run ends with a new
//! high score. Persistence is strictly best-effort — a missing, unreadable,
//! or unwritable file must never interrupt play, so the public API logs
//! failures and degrades to an in-memory-only high score.

use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;

/// File name under the platform data directory.
const STORE_FILE: &str = "high_score";

/// Errors from the fallible inner operations.
///
/// These never escape [`HighScoreStore::load`] / [`HighScoreStore::save`];
/// they exist so the log lines carry a real cause.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("high score file is corrupt: {0}")]
    Corrupt(#[from] ParseIntError),
}

/// File-backed store for the single high score integer.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store under the platform data directory
    /// (e.g. `~/.local/share/hilo/high_score` on Linux).
    pub fn open() -> Self {
        let base = directories::ProjectDirs::from("", "", "hilo")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"));

        Self::with_path(base.join(STORE_FILE))
    }

    /// Store at an explicit path (config override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted high score; any failure yields 0.
    ///
    /// A missing file is the normal first-run case and is not logged.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(value) => value,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => {
                tracing::warn!("Ignoring unreadable high score ({e}); starting from 0");
                0
            }
        }
    }

    /// Persist a new high score; failures are logged and swallowed.
    pub fn save(&self, value: u32) {
        if let Err(e) = self.try_save(value) {
            tracing::warn!("Failed to persist high score {value}: {e}");
        } else {
            tracing::debug!("Persisted high score {value} to {}", self.path.display());
        }
    }

    fn try_load(&self) -> Result<u32, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(raw.trim().parse()?)
    }

    fn try_save(&self, value: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HighScoreStore {
        HighScoreStore::with_path(dir.path().join(STORE_FILE))
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(17);
        assert_eq!(store.load(), 17);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::with_path(dir.path().join("nested/dirs/high_score"));

        store.save(4);
        assert_eq!(store.load(), 4);
    }

    #[test]
    fn corrupt_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(dir.path().join(STORE_FILE), "not a number").unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(dir.path().join(STORE_FILE), " 12\n").unwrap();
        assert_eq!(store.load(), 12);
    }
}
