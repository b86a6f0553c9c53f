//! Session store port and its in-process adapters.
//!
//! The store is a flat string key/value space, the shape browser
//! `localStorage` offers. Typed values go through [`load_json`] and
//! [`save_json`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the current [`shared_types::AuthState`].
pub const SESSION_KEY: &str = "session";
/// Key holding the student ledger (`Vec<UserRecord>`).
pub const USERS_KEY: &str = "users";
/// Key holding the subject list.
pub const SUBJECTS_KEY: &str = "subjects";
/// Key holding the note list.
pub const NOTES_KEY: &str = "notes";

/// Persistence port for everything the vault keeps between reloads.
///
/// Opened once at startup and shared by the auth service and the catalog.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// Read and deserialize a JSON value. Absent keys are `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn SessionStore,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and write a JSON value.
pub fn save_json<T: Serialize>(store: &dyn SessionStore, key: &str, value: &T) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Load a value, logging and discarding anything unreadable.
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn SessionStore, key: &str) -> T {
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unreadable stored value");
            T::default()
        }
    }
}

/// Prefix a key with the configured namespace: `notevault` + `session` →
/// `notevault.session`.
pub fn namespaced(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{namespace}.{key}")
    }
}

/// In-process store. Nothing survives the process; used by tests and as the
/// fallback when no persistent store can be opened.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSessionStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::{namespaced, SessionStore};
    use shared_types::AppError;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// One JSON file per key inside a directory, for desktop and mobile builds.
    #[derive(Debug, Clone)]
    pub struct FileSessionStore {
        dir: PathBuf,
        namespace: String,
    }

    impl FileSessionStore {
        /// Open (creating if needed) the store directory.
        pub fn open(dir: impl AsRef<Path>, namespace: &str) -> Result<Self, AppError> {
            let dir = dir.as_ref().to_path_buf();
            std::fs::create_dir_all(&dir).map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", dir.display()))
            })?;
            Ok(Self {
                dir,
                namespace: namespace.to_string(),
            })
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{}.json", namespaced(&self.namespace, key)))
        }
    }

    impl SessionStore for FileSessionStore {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            let path = self.path_for(key);
            match std::fs::read_to_string(&path) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(AppError::storage(format!(
                    "Cannot read {}: {e}",
                    path.display()
                ))),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            let path = self.path_for(key);
            std::fs::write(&path, value)
                .map_err(|e| AppError::storage(format!("Cannot write {}: {e}", path.display())))
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            let path = self.path_for(key);
            match std::fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AppError::storage(format!(
                    "Cannot remove {}: {e}",
                    path.display()
                ))),
            }
        }
    }
}
