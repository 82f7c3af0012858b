use std::{cell::RefCell, collections::HashMap, rc::Rc};

use shared::UserProfile;
use strum_macros::AsRefStr;

use crate::error::StorageError;

/// String key-value store surviving page reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_owned()))
    }

    fn remove(&self, key: &str) {
        if let Ok(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum StorageKey {
    #[strum(serialize = "currentUser")]
    CurrentUser,
    #[strum(serialize = "token")]
    Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistedSession {
    pub token: String,
    pub user: UserProfile,
}

/// Typed access to the persisted session. The user is stored as JSON, the
/// token as the raw string. Only fully loaded profiles are ever written.
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    inner: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(inner: S) -> Self {
        SessionStore { inner }
    }

    pub fn token(&self) -> Option<String> {
        self.read(StorageKey::Token)
    }

    pub fn save_token(&self, token: &str) {
        self.write(StorageKey::Token, token);
    }

    pub fn save_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.write(StorageKey::CurrentUser, &json),
            Err(error) => log::warn!(
                "Fail to encode user for storage, username={username}, error={error}",
                username = &user.username
            ),
        }
    }

    pub fn clear(&self) {
        self.inner.remove(StorageKey::CurrentUser.as_ref());
        self.inner.remove(StorageKey::Token.as_ref());
    }

    /// Returns the stored session when both keys hold a usable value.
    pub fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        match (self.read(StorageKey::Token), self.read(StorageKey::CurrentUser)) {
            (Some(token), Some(user)) => {
                let user = serde_json::from_str::<UserProfile>(&user)?;
                Ok(Some(PersistedSession { token, user }))
            }
            _ => Ok(None),
        }
    }

    /// True when at least one of the session keys holds a value.
    pub fn has_leftovers(&self) -> bool {
        self.read(StorageKey::Token).is_some() || self.read(StorageKey::CurrentUser).is_some()
    }

    // A literal "null" counts as absent.
    fn read(&self, key: StorageKey) -> Option<String> {
        self.inner
            .get(key.as_ref())
            .filter(|value| !value.is_empty() && value != "null")
    }

    fn write(&self, key: StorageKey, value: &str) {
        if let Err(error) = self.inner.set(key.as_ref(), value) {
            log::warn!(
                "Fail to persist session, key={key}, error={error}",
                key = key.as_ref()
            );
        }
    }
}
