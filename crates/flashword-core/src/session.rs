//! Session store: per-user records and the last-active-user pointer.
//!
//! All user records live under one store entry as a JSON object keyed by
//! username; the pointer is a second, plain-string entry. Every mutation
//! rewrites the whole collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{normalize, UserRecord};
use crate::store::KeyValueStore;

/// Store entry holding the JSON map of all users.
pub const USERS_KEY: &str = "flashword.users";

/// Store entry holding the key of the last active user.
pub const LAST_USER_KEY: &str = "flashword.last_user";

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Key the record is stored under (trimmed, original casing of first login).
    pub key: String,
    pub record: UserRecord,
    pub is_new_user: bool,
}

/// On-disk shape of a record. `points` is optional so records written
/// before points existed can be detected and backfilled.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    name: String,
    #[serde(rename = "currentWordIndex", default)]
    current_word_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    points: Option<u32>,
}

impl From<StoredRecord> for UserRecord {
    fn from(stored: StoredRecord) -> Self {
        UserRecord {
            display_name: stored.name,
            progress_index: stored.current_word_index,
            points: stored.points.unwrap_or(0),
        }
    }
}

impl From<&UserRecord> for StoredRecord {
    fn from(record: &UserRecord) -> Self {
        StoredRecord {
            name: record.display_name.clone(),
            current_word_index: record.progress_index,
            points: Some(record.points),
        }
    }
}

/// Owns the durable store and exposes the user/session operations.
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All users keyed by their stored key. Missing or malformed data is empty.
    pub fn list_users(&self) -> BTreeMap<String, UserRecord> {
        self.load_all()
            .into_iter()
            .map(|(key, stored)| (key, stored.into()))
            .collect()
    }

    /// Look up a user case-insensitively without creating it or moving the pointer.
    pub fn find_user(&self, raw_username: &str) -> Option<(String, UserRecord)> {
        let normalized = normalize(raw_username);
        if normalized.is_empty() {
            return None;
        }
        self.load_all()
            .into_iter()
            .find(|(key, _)| key.to_lowercase() == normalized)
            .map(|(key, stored)| (key, stored.into()))
    }

    /// Log a user in, creating a record on first sight.
    ///
    /// Blank input returns `Ok(None)` and touches nothing.
    pub fn login(&mut self, raw_username: &str) -> Result<Option<LoginOutcome>, StoreError> {
        let trimmed = raw_username.trim();
        let normalized = trimmed.to_lowercase();
        if normalized.is_empty() {
            return Ok(None);
        }

        let mut users = self.load_all();
        let existing = users
            .keys()
            .find(|key| key.to_lowercase() == normalized)
            .cloned();

        let outcome = match existing {
            Some(key) => {
                let mut needs_backfill = false;
                if let Some(stored) = users.get_mut(&key) {
                    if stored.points.is_none() {
                        stored.points = Some(0);
                        needs_backfill = true;
                    }
                }
                if needs_backfill {
                    tracing::debug!("backfilling points for user '{key}'");
                    self.save_all(&users)?;
                }
                let record = users
                    .remove(&key)
                    .map(UserRecord::from)
                    .unwrap_or_else(|| UserRecord::new(&key));
                LoginOutcome {
                    key,
                    record,
                    is_new_user: false,
                }
            }
            None => {
                let key = trimmed.to_string();
                let record = UserRecord::new(trimmed);
                users.insert(key.clone(), StoredRecord::from(&record));
                self.save_all(&users)?;
                tracing::info!("created user '{key}'");
                LoginOutcome {
                    key,
                    record,
                    is_new_user: true,
                }
            }
        };

        self.store.set(LAST_USER_KEY, &outcome.key)?;
        tracing::info!("user '{}' logged in", outcome.key);
        Ok(Some(outcome))
    }

    /// Overwrite the progress index of `key`. Unknown keys are ignored.
    pub fn update_progress(&mut self, key: &str, index: usize) -> Result<(), StoreError> {
        self.update(key, |stored| stored.current_word_index = index)
    }

    /// Overwrite the point total of `key`. Unknown keys are ignored.
    pub fn update_points(&mut self, key: &str, points: u32) -> Result<(), StoreError> {
        self.update(key, |stored| stored.points = Some(points))
    }

    /// Clear the session pointer. User records are kept.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.store.remove(LAST_USER_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Key of the last user to log in, if any.
    pub fn last_active_user(&self) -> Option<String> {
        self.store
            .get(LAST_USER_KEY)
            .filter(|key| !key.trim().is_empty())
    }

    fn update(
        &mut self,
        key: &str,
        apply: impl FnOnce(&mut StoredRecord),
    ) -> Result<(), StoreError> {
        let mut users = self.load_all();
        match users.get_mut(key) {
            Some(stored) => {
                apply(stored);
                self.save_all(&users)
            }
            None => {
                tracing::debug!("ignoring update for unknown user '{key}'");
                Ok(())
            }
        }
    }

    fn load_all(&self) -> BTreeMap<String, StoredRecord> {
        let Some(raw) = self.store.get(USERS_KEY) else {
            return BTreeMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("stored users are malformed, treating as empty: {e}");
                BTreeMap::new()
            }
        }
    }

    fn save_all(&mut self, users: &BTreeMap<String, StoredRecord>) -> Result<(), StoreError> {
        let json = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, &json)?;
        tracing::debug!("saved {} user record(s)", users.len());
        Ok(())
    }
}
