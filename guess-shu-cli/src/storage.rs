//! File-backed progress storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use guess_shu_game::{ProgressStore, SavedProgress, constants::STORAGE_KEY};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("storage i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("storage encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Progress store over a single JSON file: one record, one fixed slot,
/// mirroring the `guessShu` browser-storage key of the original game.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `$HOME/.<slot>.json`, falling back to the current
    /// directory when no home directory is available.
    #[must_use]
    pub fn at_default_path() -> Self {
        let dir = std::env::var_os("HOME").map_or_else(PathBuf::new, PathBuf::from);
        Self::new(dir.join(format!(".{STORAGE_KEY}.json")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    type Error = FileStoreError;

    fn save(&self, record: &SavedProgress) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<SavedProgress>, Self::Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                // Corrupt data counts as absent; the game must stay playable.
                log::warn!("discarding unreadable progress file: {err}");
                Ok(None)
            }
        }
    }

    fn delete(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
