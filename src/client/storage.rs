/**
 * Token Storage
 *
 * Durable storage for the session token so a session survives a restart.
 * The file backend writes a small JSON object keyed by `"token"` under the
 * platform config directory.
 */

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key under which the token is persisted
pub const TOKEN_STORAGE_KEY: &str = "token";

const APP_DIR: &str = "vocabcards";
const SESSION_FILE: &str = "session.json";

/// Where the session token lives between runs
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> io::Result<Option<String>>;

    fn save(&self, token: &str) -> io::Result<()>;

    fn clear(&self) -> io::Result<()>;
}

impl<T: TokenStorage + ?Sized> TokenStorage for Arc<T> {
    fn load(&self) -> io::Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        (**self).save(token)
    }

    fn clear(&self) -> io::Result<()> {
        (**self).clear()
    }
}

/// Token kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage under the platform config directory
    ///
    /// `None` when the platform has no config directory.
    pub fn default_location() -> Option<Self> {
        let path = dirs::config_dir()?.join(APP_DIR).join(SESSION_FILE);
        Some(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> io::Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, contents)
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> io::Result<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(TOKEN_STORAGE_KEY))
    }

    fn save(&self, token: &str) -> io::Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(TOKEN_STORAGE_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        // A corrupt file is replaced rather than left holding a stale token.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => HashMap::new(),
            Err(e) => return Err(e),
        };
        entries.remove(TOKEN_STORAGE_KEY);
        self.write_entries(&entries)
    }
}

/// Token kept in memory only
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> io::Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.token
            .lock()
            .map_err(|_| io::Error::other("token storage lock poisoned"))
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("nested").join("session.json"));

        assert_eq!(storage.load().unwrap(), None);

        storage.save("abc.def.ghi").unwrap();
        assert_eq!(storage.load().unwrap(), Some("abc.def.ghi".to_string()));

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["token"], "abc.def.ghi");

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_file_storage_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        FileTokenStorage::new(&path).save("persisted").unwrap();

        let reopened = FileTokenStorage::new(&path);
        assert_eq!(reopened.load().unwrap(), Some("persisted".to_string()));
    }

    #[test]
    fn test_clear_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("session.json"));
        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryTokenStorage::with_token("t1");
        assert_eq!(storage.load().unwrap(), Some("t1".to_string()));
        storage.save("t2").unwrap();
        assert_eq!(storage.load().unwrap(), Some("t2".to_string()));
        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }
}
