//! In-memory session storage.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::store::{SessionStore, from_entries, to_entries};
use crate::{Session, StoreError, StoredSession};

/// In-memory storage implementation.
///
/// Useful for tests and for clients that should forget the session on
/// exit. Data is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with raw entries.
    ///
    /// Handy for reproducing what an older client left behind, such as a
    /// lone `"token"` entry.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Returns a copy of the raw entries.
    pub fn entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        Ok(self.entries.lock().map_err(|_| StoreError::Poisoned)?.clone())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<StoredSession, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(from_entries(&entries))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        // Encode before taking the lock so a failure leaves the old pair.
        let new_entries = to_entries(session)?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        *entries = new_entries.unwrap_or_default();
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MEMBER_KEY, TOKEN_KEY};
    use clubhouse_protocol::{Member, MemberId};

    fn session() -> Session {
        Session::authenticated(
            "t1",
            Member {
                id: MemberId::new("m1"),
                username: "alice".into(),
                cni: "AB123".into(),
                phone: "0600".into(),
                email: "alice@example.com".into(),
            },
        )
    }

    #[test]
    fn test_load_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        store.save(&session()).unwrap();

        let loaded = store.load().unwrap().into_session();

        assert_eq!(loaded, Some(session()));
    }

    #[test]
    fn test_save_anonymous_clears_both_entries() {
        let store = MemoryStore::new();
        store.save(&session()).unwrap();

        store.save(&Session::Anonymous).unwrap();

        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_pair() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "old"), ("unrelated", "x")]);

        store.save(&session()).unwrap();

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[TOKEN_KEY], "t1");
        assert!(entries.contains_key(MEMBER_KEY));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        store.save(&session()).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_with_entries_token_only_loads_partial_pair() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "legacy")]);

        let stored = store.load().unwrap();

        assert_eq!(stored.token.as_deref(), Some("legacy"));
        assert!(stored.member.is_none());
        assert!(stored.into_session().is_none());
    }
}
