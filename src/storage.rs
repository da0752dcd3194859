//! Browser Persistence
//!
//! Session and theme values kept in `localStorage`.

use serde::{Deserialize, Serialize};

use crate::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "auth-user";
pub const THEME_KEY: &str = "theme-storage";

/// Minimal string key/value interface over `localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; silently unavailable outside a browser or in private mode
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage rejected write to {key}");
                }
            }
            None => log::warn!("localStorage unavailable, {key} not persisted"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemePreference {
    is_dark: bool,
}

/// Everything restored on page load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_dark: bool,
}

pub fn load_session(kv: &impl KeyValueStore) -> PersistedSession {
    let token = kv.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let user = kv.get(USER_KEY).and_then(|raw| match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding stored user: {err}");
            None
        }
    });
    let is_dark = kv
        .get(THEME_KEY)
        .and_then(|raw| serde_json::from_str::<ThemePreference>(&raw).ok())
        .unwrap_or_default()
        .is_dark;

    PersistedSession { token, user, is_dark }
}

/// Bearer token for outgoing requests
pub fn load_token(kv: &impl KeyValueStore) -> Option<String> {
    kv.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn save_login(kv: &impl KeyValueStore, user: &User, token: &str) {
    kv.set(TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => kv.set(USER_KEY, &json),
        Err(err) => log::error!("failed to serialize user: {err}"),
    }
}

pub fn clear_login(kv: &impl KeyValueStore) {
    kv.remove(TOKEN_KEY);
    kv.remove(USER_KEY);
}

pub fn save_theme(kv: &impl KeyValueStore, is_dark: bool) {
    if let Ok(json) = serde_json::to_string(&ThemePreference { is_dark }) {
        kv.set(THEME_KEY, &json);
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::models::Gender;

    fn user() -> User {
        User {
            id: 42,
            name: "김철수".into(),
            email: "cs@example.com".into(),
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_empty_storage_is_signed_out_light_mode() {
        let session = load_session(&MemoryStore::default());
        assert_eq!(session, PersistedSession::default());
    }

    #[test]
    fn test_login_round_trip_and_clear() {
        let kv = MemoryStore::default();
        save_login(&kv, &user(), "jwt-token");

        let session = load_session(&kv);
        assert_eq!(session.token.as_deref(), Some("jwt-token"));
        assert_eq!(session.user, Some(user()));
        assert_eq!(load_token(&kv).as_deref(), Some("jwt-token"));

        clear_login(&kv);
        let session = load_session(&kv);
        assert_eq!(session.token, None);
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_theme_persisted_as_json() {
        let kv = MemoryStore::default();
        save_theme(&kv, true);
        assert_eq!(kv.get(THEME_KEY).as_deref(), Some(r#"{"isDark":true}"#));
        assert!(load_session(&kv).is_dark);
    }

    #[test]
    fn test_corrupt_entries_are_ignored() {
        let kv = MemoryStore::default();
        kv.set(USER_KEY, "{not json");
        kv.set(THEME_KEY, "dark");
        kv.set(TOKEN_KEY, "");
        assert_eq!(load_session(&kv), PersistedSession::default());
    }
}
