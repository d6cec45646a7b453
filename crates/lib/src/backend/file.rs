//! File-backed slot storage
//!
//! Each slot is stored as `<dir>/<key>.json`. Writes go to a temporary file in
//! the same directory which is then renamed over the slot file, so a crash
//! mid-write leaves the previous value in place.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{BackendError, KeyValueStore};
use crate::{Error, Result};

/// Durable [`KeyValueStore`] rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store in `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|source| -> Error {
            BackendError::FileIo {
                key: dir.display().to_string(),
                source,
            }
            .into()
        })?;
        tracing::debug!("Opened file store at {}", dir.display());
        Ok(Self { dir })
    }

    /// The data directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// Slot names are restricted to ASCII alphanumerics, `-` and `_` so a key
    /// can never escape the data directory.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(BackendError::InvalidKey {
                key: key.to_string(),
            }
            .into());
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn file_io(key: &str, source: std::io::Error) -> Error {
    BackendError::FileIo {
        key: key.to_string(),
        source,
    }
    .into()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(file_io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| file_io(key, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| file_io(key, e))?;
        tmp.as_file().sync_all().map_err(|e| file_io(key, e))?;
        tmp.persist(&path).map_err(|e| file_io(key, e.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(file_io(key, e)),
        }
    }
}
