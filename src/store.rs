//! Persistent store — JSON key-value persistence behind a swappable backend.
//!
//! DESIGN
//! ======
//! Earlier builds of this system persisted into browser local storage:
//! string keys under a shared prefix, JSON string values, best effort.
//! `DirBackend` keeps that shape as one UTF-8 JSON file per key;
//! `MemoryBackend` backs tests and sessions whose directory is unusable.
//!
//! ERROR HANDLING
//! ==============
//! The store never raises to its callers. Reads absorb missing files and
//! corrupt JSON (logged, `None` returned); writes are best effort (logged
//! on failure). Services layered above treat an absent read as "seed me"
//! and keep running on in-memory state if writes fail.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Shared key prefix, kept so data directories written by earlier builds
/// remain readable.
pub const KEY_PREFIX: &str = "bilingual-menu-";

// =============================================================================
// KEYS
// =============================================================================

/// The closed set of persisted keys. String forms are fixed for data
/// compatibility; there is no arbitrary key access above the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKey {
    Categories,
    MenuItems,
    Language,
    Theme,
    CafeName,
    LogoUrl,
    CategoryDisplayStyle,
}

impl StoreKey {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::MenuItems => "menuItems",
            Self::Language => "language",
            Self::Theme => "theme",
            Self::CafeName => "cafeName",
            Self::LogoUrl => "logoUrl",
            Self::CategoryDisplayStyle => "categoryDisplayStyle",
        }
    }

    fn full(self) -> String {
        format!("{KEY_PREFIX}{}", self.name())
    }
}

// =============================================================================
// BACKENDS
// =============================================================================

/// Raw string-keyed storage. Implementations are synchronous: local reads
/// and writes are fast enough at this scale that async buys nothing.
pub trait Backend: Send + Sync {
    /// Fetch the raw value for `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the backing medium is unavailable.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the write cannot complete.
    fn set(&self, key: &str, raw: &str) -> io::Result<()>;
}

/// One `<key>.json` file per key under a data directory.
pub struct DirBackend {
    dir: PathBuf,
}

impl DirBackend {
    /// Create the backend, making the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Backend for DirBackend {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, key: &str, raw: &str) -> io::Result<()> {
        std::fs::write(self.path(key), raw)
    }
}

/// In-memory backend for tests and degraded sessions.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| io::Error::other("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, raw: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().map_err(|_| io::Error::other("store lock poisoned"))?;
        entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Typed facade over a [`Backend`]. Cheap to clone; clones share the
/// backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
}

impl Store {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Store over a fresh [`MemoryBackend`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Store over a [`DirBackend`] at `dir`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the directory cannot be created.
    pub fn open_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(Arc::new(DirBackend::new(dir.as_ref())?)))
    }

    /// Whether a raw value exists for `key`, readable or not. Lets the
    /// loader distinguish "first run" (seed and persist) from "present but
    /// corrupt" (session fallback, stored bytes left untouched).
    #[must_use]
    pub fn exists(&self, key: StoreKey) -> bool {
        matches!(self.backend.get(&key.full()), Ok(Some(_)))
    }

    /// Read and deserialize the value for `key`. Absent, unreadable, and
    /// corrupt values all come back as `None`; the latter two are logged.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        match self.backend.get(&key.full()) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key = key.name(), error = %e, "discarding corrupt stored value");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = key.name(), error = %e, "storage read failed");
                None
            }
        }
    }

    /// Serialize and store `value` under `key`. Best effort: failures are
    /// logged and the in-memory state stays authoritative for the session.
    pub fn write<T: Serialize>(&self, key: StoreKey, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!(key = key.name(), error = %e, "failed to serialize value for storage");
                return;
            }
        };
        match self.backend.set(&key.full(), &raw) {
            Ok(()) => debug!(key = key.name(), bytes = raw.len(), "persisted"),
            Err(e) => error!(key = key.name(), error = %e, "storage write failed"),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
