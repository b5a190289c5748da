use std::fs;
use std::io;
use std::path::PathBuf;

use super::{KeyValueStore, StorageError};

/// Stores each key as `<dir>/<key>.json`.
///
/// The directory is created on first write.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys map straight to file names, so only non-empty ASCII
    /// alphanumerics, `_` and `-` are allowed.
    #[must_use]
    pub fn accepts_key(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !Self::accepts_key(key) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported storage key {:?}", key),
            )
            .into());
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // Not UTF-8: the file is there, its contents are garbage.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(StorageError::malformed(key, e)),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        log::debug!("writing {}", path.display());
        fs::write(path, value)?;
        Ok(())
    }
}
