//! Store persisted as a single JSON file.

use crate::entries::Entries;
use crate::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store kept in memory and written through to a JSON file.
///
/// Every mutation rewrites the file using the atomic write pattern, so a
/// crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    capacity: Option<usize>,
    entries: Mutex<Entries>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store. A file that cannot be parsed is
    /// renamed to `<file>.corrupted.<timestamp>` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>, capacity: Option<usize>) -> StorageResult<Self> {
        let path = path.into();
        let entries = Self::load(&path)?;

        Ok(Self {
            path,
            capacity,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn load(path: &Path) -> StorageResult<Entries> {
        if !path.exists() {
            info!("No store file at {path:?} (first launch)");
            return Ok(Entries::default());
        }

        let contents =
            fs::read_to_string(path).map_err(|e| StorageError::file_read(path.to_path_buf(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(map) => {
                info!("Loaded store {path:?} ({} entries)", map.len());
                Ok(Entries::from_map(map))
            }
            Err(e) => {
                warn!("Store file corrupted at {path:?}: {e}");
                Self::backup_corrupted(path)?;
                Ok(Entries::default())
            }
        }
    }

    /// Renames a corrupted store file out of the way for debugging.
    fn backup_corrupted(path: &Path) -> StorageResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let mut backup = path.as_os_str().to_owned();
        backup.push(format!(".corrupted.{timestamp}"));
        let backup_path = PathBuf::from(backup);

        fs::rename(path, &backup_path).map_err(StorageError::backup_failed)?;

        warn!("Backed up corrupted store to {backup_path:?}");
        Ok(backup_path)
    }

    /// Writes the entry map: temp file, fsync, atomic rename.
    fn persist(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::dir_creation(parent.to_path_buf(), e))?;
        }

        let mut temp = self.path.as_os_str().to_owned();
        temp.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp);

        let json = serde_json::to_string_pretty(entries.map())?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        debug!("Persisted store {:?} ({} bytes used)", self.path, entries.used());
        Ok(())
    }

    #[track_caller]
    fn lock(&self) -> StorageResult<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::lock_poisoned())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.lock()?;
        let previous = entries.insert(key, value, self.capacity)?;

        if let Err(e) = self.persist(&entries) {
            entries.restore(key, previous);
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.lock()?;
        let Some(previous) = entries.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&entries) {
            entries.restore(key, Some(previous));
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.lock()?.keys())
    }
}
