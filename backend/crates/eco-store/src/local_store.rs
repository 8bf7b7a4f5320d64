use crate::{Language, LANGUAGE_KEY, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

const STORAGE_FILENAME: &str = "storage.json";
const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// String-valued key-value store persisted as a single JSON file.
///
/// Every mutation is written through immediately.
#[derive(Debug)]
pub struct LocalStore {
    dir: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Opens the store in `dir`, creating the directory if needed.
    ///
    /// A corrupted storage file is moved aside to
    /// `storage.json.corrupted.{timestamp}` and the store starts empty.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        let path = dir.join(STORAGE_FILENAME);
        if !path.exists() {
            info!("No storage file at {path:?} (first launch)");
            return Ok(Self {
                dir,
                entries: BTreeMap::new(),
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                debug!("Loaded {} storage entries from {path:?}", entries.len());
                entries
            }
            Err(e) => {
                warn!("Storage file corrupted at {path:?}: {e}");
                Self::backup_corrupted(&dir, &path)?;
                BTreeMap::new()
            }
        };

        Ok(Self { dir, entries })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILENAME)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Memory only changes once the file write has succeeded.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> StoreResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.into());
        self.commit(entries)
    }

    pub fn remove(&mut self, key: &str) -> StoreResult<Option<String>> {
        if !self.entries.contains_key(key) {
            return Ok(None);
        }

        let mut entries = self.entries.clone();
        let removed = entries.remove(key);
        self.commit(entries)?;
        Ok(removed)
    }

    /// Reads a JSON-encoded value. Absent keys give `None`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        self.get(key)
            .map(|raw| serde_json::from_str(raw).map_err(|e| StoreError::value(key, e)))
            .transpose()
    }

    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::value(key, e))?;
        self.set(key, raw)
    }

    /// Stored UI language; missing or unknown values give the default.
    pub fn language(&self) -> Language {
        self.get(LANGUAGE_KEY)
            .and_then(|raw| Language::from_str(raw).ok())
            .unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.set(LANGUAGE_KEY, language.as_str())
    }

    fn commit(&mut self, entries: BTreeMap<String, String>) -> StoreResult<()> {
        self.save(&entries)?;
        self.entries = entries;
        Ok(())
    }

    /// Writes the entries using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{STORAGE_FILENAME}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Saved {} storage entries", entries.len());
        Ok(())
    }

    fn backup_corrupted(dir: &Path, path: &Path) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = dir.join(format!("{STORAGE_FILENAME}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path).map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted storage to {backup_path:?}");
        Ok(backup_path)
    }
}
