use std::{cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;

use crate::api::UserProfile;

pub const USER_KEY: &str = "hrms_user";
pub const TOKEN_KEY: &str = "hrms_token";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("browser storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to {op} `{key}` in browser storage")]
    Access { op: &'static str, key: String },
    #[error("stored session profile is corrupt: {0}")]
    Corrupt(String),
}

/// Key/value backend holding the persisted session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`, resolved on every access.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        crate::utils::storage::local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Access {
                op: "read",
                key: key.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        crate::utils::storage::local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Access {
                op: "write",
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        crate::utils::storage::local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Access {
                op: "remove",
                key: key.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// The single persisted session: a bearer token plus the signed-in profile.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn SessionStorage>) -> Self {
        Self { backend }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn browser() -> Self {
        Self::in_memory()
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    pub fn token(&self) -> Option<String> {
        match self.backend.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                log::warn!("Could not read session token: {}", err);
                None
            }
        }
    }

    /// Reads both keys. A missing key means no session; a corrupt profile is an error.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let token = self.backend.get(TOKEN_KEY)?;
        let user = self.backend.get(USER_KEY)?;
        let (Some(token), Some(user)) = (token, user) else {
            return Ok(None);
        };
        if token.trim().is_empty() {
            return Ok(None);
        }
        let user: UserProfile =
            serde_json::from_str(&user).map_err(|err| StorageError::Corrupt(err.to_string()))?;
        Ok(Some(Session { token, user }))
    }

    pub fn save(&self, token: &str, user: &UserProfile) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string(user).map_err(|err| StorageError::Corrupt(err.to_string()))?;
        self.backend.set(USER_KEY, &serialized)?;
        self.backend.set(TOKEN_KEY, token)
    }

    /// Removes both keys, attempting the second even when the first fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        let user = self.backend.remove(USER_KEY);
        let token = self.backend.remove(TOKEN_KEY);
        user.and(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Role;

    fn profile() -> UserProfile {
        UserProfile {
            id: "e1".into(),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            role: Role::Employee,
        }
    }

    #[test]
    fn save_then_load_restores_session() {
        let store = SessionStore::in_memory();
        store.save("tok-1", &profile()).unwrap();
        let session = store.load().unwrap().unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.user, profile());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn load_requires_both_keys() {
        let backend = Rc::new(MemoryStorage::default());
        let store = SessionStore::new(backend.clone());
        backend.set(TOKEN_KEY, "tok-1").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_profile_is_reported() {
        let backend = Rc::new(MemoryStorage::default());
        let store = SessionStore::new(backend.clone());
        backend.set(TOKEN_KEY, "tok-1").unwrap();
        backend.set(USER_KEY, "{not json").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn clear_removes_both_keys() {
        let backend = Rc::new(MemoryStorage::default());
        let store = SessionStore::new(backend.clone());
        store.save("tok-1", &profile()).unwrap();
        store.clear().unwrap();
        assert_eq!(backend.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(backend.get(USER_KEY).unwrap(), None);
        assert!(store.token().is_none());
    }
}
