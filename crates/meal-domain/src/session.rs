//! Session Persistence
//!
//! Keeps the login tokens, the user name and the active group in a
//! key-value store (the browser's local storage in the app). The active
//! group is also remembered per user so it comes back on the next login.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::models::{PlanningGroup, TokenPair};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_DATA_KEY: &str = "user_data";
pub const ACTIVE_GROUP_KEY: &str = "active_group";
/// Keys written by older releases, removed on restore
pub const LEGACY_KEYS: [&str; 2] = ["active_group_id", "active_group_name"];

pub fn group_preference_key(username: &str) -> String {
    format!("preference_active_group_{username}")
}

/// Persistent string storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// What is kept about the logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

/// `exp` claim (seconds since epoch) of a JWT access token
pub fn token_expiry(token: &str) -> DomainResult<i64> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| DomainError::MalformedToken("missing payload segment".into()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| DomainError::MalformedToken(e.to_string()))?;
    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| DomainError::MalformedToken(e.to_string()))?;
    Ok(claims.exp)
}

pub fn is_expired(token: &str, now_secs: i64) -> DomainResult<bool> {
    Ok(token_expiry(token)? < now_secs)
}

/// State found in storage at start-up
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestoredSession {
    pub access_token: Option<String>,
    pub user: Option<StoredUser>,
    pub active_group: Option<PlanningGroup>,
}

impl RestoredSession {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("[SESSION] Discarding unreadable {key}: {e}");
                self.store.remove(key);
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, &raw),
            Err(e) => warn!("[SESSION] Could not store {key}: {e}"),
        }
    }

    /// Load the session, logging out when the access token has expired
    pub fn restore(&self, now_secs: i64) -> RestoredSession {
        let active_group = self.read_json::<PlanningGroup>(ACTIVE_GROUP_KEY);
        for key in LEGACY_KEYS {
            self.store.remove(key);
        }

        let Some(token) = self.store.get(ACCESS_TOKEN_KEY) else {
            return RestoredSession { active_group, ..Default::default() };
        };

        match is_expired(&token, now_secs) {
            Ok(true) => {
                info!("[SESSION] Access token expired, logging out");
                self.logout();
                RestoredSession::default()
            }
            Ok(false) => RestoredSession {
                access_token: Some(token),
                user: self.read_json(USER_DATA_KEY),
                active_group,
            },
            Err(e) => {
                warn!("[SESSION] Error restoring session: {e}");
                self.store.remove(ACCESS_TOKEN_KEY);
                self.store.remove(USER_DATA_KEY);
                RestoredSession { active_group, ..Default::default() }
            }
        }
    }

    /// Persist a fresh login and bring back the user's preferred group
    pub fn save_login(&self, username: &str, tokens: &TokenPair) -> RestoredSession {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh);

        let user = StoredUser { username: username.to_string() };
        self.write_json(USER_DATA_KEY, &user);

        let active_group = self.read_json::<PlanningGroup>(&group_preference_key(username));
        if let Some(group) = &active_group {
            self.write_json(ACTIVE_GROUP_KEY, group);
        }

        RestoredSession {
            access_token: Some(tokens.access.clone()),
            user: Some(user),
            active_group,
        }
    }

    pub fn select_group(&self, user: Option<&StoredUser>, group: &PlanningGroup) {
        self.write_json(ACTIVE_GROUP_KEY, group);
        if let Some(user) = user {
            self.write_json(&group_preference_key(&user.username), group);
        }
    }

    /// Drop tokens, user data and the active group. Group preferences stay.
    pub fn logout(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(USER_DATA_KEY);
        self.store.remove(ACTIVE_GROUP_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

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

    fn token(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"user_id":3,"exp":{exp}}}"#));
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
    }

    fn group(id: u32) -> PlanningGroup {
        PlanningGroup {
            id,
            name: "Casa".into(),
            members: vec![],
            members_names: vec![],
            planning_config: serde_json::Value::Null,
            created_at: None,
        }
    }

    fn tokens(exp: i64) -> TokenPair {
        TokenPair { access: token(exp), refresh: "refresh".into() }
    }

    #[test]
    fn test_token_expiry() {
        assert_eq!(token_expiry(&token(1_800_000_000)).unwrap(), 1_800_000_000);
        assert!(is_expired(&token(100), 200).unwrap());
        assert!(!is_expired(&token(300), 200).unwrap());
        assert!(token_expiry("not-a-jwt").is_err());
        assert!(token_expiry("a.!!!.c").is_err());
    }

    #[test]
    fn test_login_then_restore() {
        let store = MemoryStore::default();
        let session = SessionStore::new(&store);
        let saved = session.save_login("ana", &tokens(1_000));
        assert!(saved.is_authenticated());

        let restored = session.restore(500);
        assert_eq!(restored.user, Some(StoredUser { username: "ana".into() }));
        assert_eq!(restored.access_token, Some(token(1_000)));
    }

    #[test]
    fn test_expired_token_logs_out() {
        let store = MemoryStore::default();
        let session = SessionStore::new(&store);
        session.save_login("ana", &tokens(1_000));
        session.select_group(Some(&StoredUser { username: "ana".into() }), &group(2));

        let restored = session.restore(2_000);
        assert!(!restored.is_authenticated());
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.get(ACTIVE_GROUP_KEY), None);
        // preference survives logout
        assert!(store.get(&group_preference_key("ana")).is_some());
    }

    #[test]
    fn test_group_preference_restored_on_login() {
        let store = MemoryStore::default();
        let session = SessionStore::new(&store);
        let ana = StoredUser { username: "ana".into() };
        session.save_login("ana", &tokens(1_000));
        session.select_group(Some(&ana), &group(7));
        session.logout();

        let saved = session.save_login("ana", &tokens(1_000));
        assert_eq!(saved.active_group.map(|g| g.id), Some(7));
        assert!(store.get(ACTIVE_GROUP_KEY).is_some());

        let other = session.save_login("luis", &tokens(1_000));
        assert_eq!(other.active_group, None);
    }

    #[test]
    fn test_restore_cleans_broken_and_legacy_keys() {
        let store = MemoryStore::default();
        store.set(ACTIVE_GROUP_KEY, "{broken");
        store.set("active_group_id", "4");
        store.set(ACCESS_TOKEN_KEY, "garbage");
        store.set(USER_DATA_KEY, r#"{"username":"ana"}"#);

        let restored = SessionStore::new(&store).restore(0);
        assert_eq!(restored, RestoredSession::default());
        assert_eq!(store.get(ACTIVE_GROUP_KEY), None);
        assert_eq!(store.get("active_group_id"), None);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.get(USER_DATA_KEY), None);
    }
}
