use crate::model::entry::Entry;
use derive_more::Display;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "failed to read data file: {}", _0)]
    Read(std::io::Error),
    #[display(fmt = "data file is not a JSON array of entries: {}", _0)]
    Parse(serde_json::Error),
    #[display(fmt = "failed to encode entries: {}", _0)]
    Encode(serde_json::Error),
    #[display(fmt = "failed to write data file: {}", _0)]
    Write(std::io::Error),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Read(e) | StoreError::Write(e) => Some(e),
            StoreError::Parse(e) | StoreError::Encode(e) => Some(e),
        }
    }
}

/// The entry list, persisted as one pretty-printed JSON array.
///
/// Every write replaces the whole document. Mutations are serialized through
/// [`Store::modify`]; reads go straight to disk.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file as `[]` if it is missing. Never touches an existing file.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(StoreError::Write(e)),
        };

        file.write_all(b"[]").await.map_err(StoreError::Write)?;
        file.flush().await.map_err(StoreError::Write)?;
        tracing::info!(path = %self.path.display(), "Initialized empty data file");
        Ok(())
    }

    /// Reads the whole list. An empty or blank file is an empty list.
    pub async fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::Read)?;

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(StoreError::Parse)
    }

    /// Overwrites the file with `entries` via `<file>.tmp` + rename.
    ///
    /// Does not take the write lock; concurrent callers should use [`Store::modify`].
    pub async fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(StoreError::Encode)?;

        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");
        let tmp = self.path.with_extension(format!("{ext}.tmp"));

        fs::write(&tmp, &bytes).await.map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::Write)?;
        Ok(())
    }

    /// One serialized read-transform-write cycle.
    ///
    /// If `f` fails, the file is left untouched and its error is returned.
    pub async fn modify<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<Entry>) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;

        self.ensure_exists().await?;
        let mut entries = self.load().await?;
        let out = f(&mut entries)?;
        self.save(&entries).await?;
        Ok(out)
    }
}
