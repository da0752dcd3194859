//! Session Store
//!
//! Uses Leptos reactive_stores for the signed-in member and theme preference.
//! Every mutation is mirrored to `localStorage`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;
use crate::storage::{self, LocalStorage, PersistedSession};

/// Client-side session with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Dark mode flag
    pub is_dark: bool,
    /// Bearer token from the last login
    pub token: Option<String>,
    /// Member the token belongs to
    pub user: Option<User>,
}

impl From<PersistedSession> for SessionState {
    fn from(persisted: PersistedSession) -> Self {
        Self {
            is_dark: persisted.is_dark,
            token: persisted.token,
            user: persisted.user,
        }
    }
}

impl SessionState {
    /// Restore from `localStorage`
    pub fn restore() -> Self {
        storage::load_session(&LocalStorage).into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_authenticated(store: &SessionStore) -> bool {
    store.with(SessionState::is_authenticated)
}

/// Id of the signed-in member, if any
pub fn store_user_id(store: &SessionStore) -> Option<u64> {
    store.user().with(|user| user.as_ref().map(|u| u.id))
}

pub fn store_login(store: &SessionStore, user: User, token: String) {
    storage::save_login(&LocalStorage, &user, &token);
    *store.user().write() = Some(user);
    *store.token().write() = Some(token);
}

pub fn store_logout(store: &SessionStore) {
    storage::clear_login(&LocalStorage);
    *store.user().write() = None;
    *store.token().write() = None;
}

pub fn store_toggle_theme(store: &SessionStore) {
    let is_dark = !store.is_dark().get_untracked();
    storage::save_theme(&LocalStorage, is_dark);
    *store.is_dark().write() = is_dark;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_authenticated_needs_token_and_user() {
        let mut state = SessionState::default();
        assert!(!state.is_authenticated());

        state.token = Some("t".into());
        assert!(!state.is_authenticated());

        state.user = Some(User {
            id: 1,
            name: "이영희".into(),
            email: "yh@example.com".into(),
            gender: Gender::Female,
        });
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_from_persisted() {
        let state: SessionState = PersistedSession {
            token: None,
            user: None,
            is_dark: true,
        }
        .into();
        assert!(state.is_dark);
        assert!(!state.is_authenticated());
    }
}
