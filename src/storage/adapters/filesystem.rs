//! Filesystem key-value store rooted in a capability-scoped directory.
//!
//! Each key maps to `<key>.json` inside the data directory. Writes go to a
//! uniquely named staging file first and are then renamed over the target,
//! so a crash mid-write leaves the previous document intact.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io;
use std::sync::Arc;
use uuid::Uuid;

use crate::storage::ports::{KeyValueStore, StorageError, StorageResult};

const DOCUMENT_EXTENSION: &str = "json";

/// Key-value store persisting one JSON document per key on disk.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: Utf8PathBuf,
    dir: Arc<Dir>,
}

impl FileKeyValueStore {
    /// Opens (creating if necessary) the data directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root_path = root.as_ref();
        Dir::create_ambient_dir_all(root_path, ambient_authority())
            .map_err(|err| StorageError::io(root_path.as_str(), err))?;
        let dir = Dir::open_ambient_dir(root_path, ambient_authority())
            .map_err(|err| StorageError::io(root_path.as_str(), err))?;
        Ok(Self {
            root: root_path.to_owned(),
            dir: Arc::new(dir),
        })
    }

    /// Returns the data directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    async fn run_blocking<T, F>(&self, key: &str, op: F) -> StorageResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> StorageResult<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || op(&dir))
            .await
            .map_err(|err| StorageError::io(key, io::Error::other(err.to_string())))?
    }
}

/// Maps a storage key onto its document file name.
fn document_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{DOCUMENT_EXTENSION}"))
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let name = document_name(key)?;
        let owned_key = key.to_owned();
        self.run_blocking(key, move |dir| match dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(owned_key, err)),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = document_name(key)?;
        let staging = format!(".{name}.{}.tmp", Uuid::now_v7().simple());
        let contents = value.to_owned();
        let owned_key = key.to_owned();
        self.run_blocking(key, move |dir| {
            let staged = dir
                .write(&staging, contents.as_bytes())
                .and_then(|()| dir.rename(&staging, dir, &name));
            if let Err(err) = staged {
                let _cleanup = dir.remove_file(&staging);
                return Err(StorageError::io(owned_key, err));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let name = document_name(key)?;
        let owned_key = key.to_owned();
        self.run_blocking(key, move |dir| match dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(owned_key, err)),
        })
        .await
    }
}
