use std::{cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation failed for key `{key}`")]
    Operation { key: String },
}

/// Key/value area with the shape of the browser's Web Storage API.
pub trait StorageArea {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl StorageArea for web_sys::Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        web_sys::Storage::get_item(self, key).map_err(|_| StorageError::Operation { key: key.into() })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        web_sys::Storage::set_item(self, key, value)
            .map_err(|_| StorageError::Operation { key: key.into() })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        web_sys::Storage::remove_item(self, key)
            .map_err(|_| StorageError::Operation { key: key.into() })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("No window object".into()))
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("No localStorage".into()))?
        .ok_or_else(|| StorageError::Unavailable("No localStorage".into()))
}

#[cfg(target_arch = "wasm32")]
pub fn session_storage() -> Result<web_sys::Storage, StorageError> {
    window()?
        .session_storage()
        .map_err(|_| StorageError::Unavailable("No sessionStorage".into()))?
        .ok_or_else(|| StorageError::Unavailable("No sessionStorage".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::Unavailable(
        "localStorage requires a browser".into(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::Unavailable(
        "sessionStorage requires a browser".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes_items() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set_item("access_token", "abc").unwrap();
        assert_eq!(storage.get_item("access_token").unwrap().as_deref(), Some("abc"));

        storage.remove_item("access_token").unwrap();
        assert_eq!(storage.get_item("access_token").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let view = storage.clone();
        storage.set_item("role", "admin").unwrap();
        assert_eq!(view.get_item("role").unwrap().as_deref(), Some("admin"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_storage_is_unavailable_on_host() {
        assert!(matches!(local_storage(), Err(StorageError::Unavailable(_))));
        assert!(matches!(session_storage(), Err(StorageError::Unavailable(_))));
    }
}
