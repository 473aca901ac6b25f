//! Durable key/value persistence behind the session repository.
//!
//! Reads degrade silently (an unreadable store looks empty); writes surface
//! `AppError::Persistence` so callers can fail safe to the sign-in route.

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::{Mutex, RwLock};
use tracing::warn;

use crate::error::{AppError, AppResult};

pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// In-memory store: the test double, also handy for stateless deployments.
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.map.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.map.write().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object per state folder, rewritten on every
/// mutation. The file is the unit of durability; no write-ahead anything.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

const STORE_FILE: &str = "session.json";

impl FileStore {
    pub fn open(state_folder: &str) -> AppResult<Self> {
        std::fs::create_dir_all(state_folder)
            .map_err(|e| AppError::persistence("state_folder".to_string(), format!("cannot create {}: {}", state_folder, e)))?;
        Ok(Self { path: PathBuf::from(state_folder).join(STORE_FILE), lock: Mutex::new(()) })
    }

    fn load(&self) -> HashMap<String, String> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!("session store unreadable at {:?}: {}", self.path, e);
                return HashMap::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                // Garbled state degrades to empty, same as a missing file
                warn!("session store garbled at {:?}: {}", self.path, e);
                HashMap::new()
            }
        }
    }

    fn save(&self, map: &HashMap<String, String>) -> AppResult<()> {
        let text = serde_json::to_string_pretty(map)
            .map_err(|e| AppError::persistence("store_encode".to_string(), e.to_string()))?;
        std::fs::write(&self.path, text)
            .map_err(|e| AppError::persistence("store_write".to_string(), format!("{:?}: {}", self.path, e)))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _g = self.lock.lock();
        self.load().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let _g = self.lock.lock();
        let mut map = self.load();
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let _g = self.lock.lock();
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }
}
