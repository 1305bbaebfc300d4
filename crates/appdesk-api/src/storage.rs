//! Persisted key-value storage
//!
//! Holds the session token, the cached user, the role and the theme. Values
//! are plain strings; the user is stored as JSON.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use appdesk_core::prelude::*;
use fs2::FileExt;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const THEME_KEY: &str = "theme";
pub const ROLE_KEY: &str = "role";

/// String key-value store shared by the gateways and the dashboard
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────
// File-backed storage
// ─────────────────────────────────────────────────────────────────

/// JSON object on disk, rewritten under an exclusive lock on every change
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Default location: `<data_local_dir>/appdesk/storage.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("appdesk").join("storage.json"))
    }

    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring corrupt storage file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read storage file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!("Opened storage at {} ({} keys)", path.display(), entries.len());

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::storage("storage lock poisoned"))?;
        let mut next = entries.clone();
        change(&mut next);
        // memory only moves once the file holds the new state
        write_locked(&self.path, &next)?;
        *entries = next;
        Ok(())
    }
}

fn write_locked(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    use std::io::Write;

    let content = serde_json::to_string_pretty(entries)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::storage(format!("Failed to create storage directory: {}", e)))?;
    }

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::storage(format!("Failed to open storage file: {}", e)))?;

    file.lock_exclusive()
        .map_err(|e| Error::storage(format!("Failed to lock storage file: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| Error::storage(format!("Failed to write storage file: {}", e)))?;
    file.flush()
        .map_err(|e| Error::storage(format!("Failed to flush storage file: {}", e)))?;

    Ok(())
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

// ─────────────────────────────────────────────────────────────────
// In-memory storage
// ─────────────────────────────────────────────────────────────────

/// Process-local store for tests and one-shot headless runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| Error::storage("storage lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| Error::storage("storage lock poisoned"))?
            .remove(key);
        Ok(())
    }
}
