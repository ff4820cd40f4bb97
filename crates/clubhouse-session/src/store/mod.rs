//! Persistence for the session across process restarts.
//!
//! A store keeps exactly two string entries, `"token"` and `"member"`
//! (the member as its own JSON document), and always writes or clears
//! them together. Two backends ship with the crate:
//!
//! - [`MemoryStore`]: in-process map, for tests and throwaway clients
//! - [`FileStore`]: a small JSON file, replaced atomically on save

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use clubhouse_protocol::Member;

use crate::{Session, StoreError, StoredSession};

/// Entry name of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Entry name of the JSON-encoded member profile.
pub const MEMBER_KEY: &str = "member";

/// Scoped key-value persistence for one session.
///
/// Implementations must never leave one entry written and the other
/// stale: `save` replaces both or neither, `clear` removes both.
pub trait SessionStore: Send + Sync + 'static {
    /// Reads back whatever was persisted.
    ///
    /// Nothing persisted, or entries that cannot be parsed, yield an
    /// empty or partial [`StoredSession`] rather than an error. `Err` is
    /// for a backend that could not be read at all.
    fn load(&self) -> Result<StoredSession, StoreError>;

    /// Persists `session`, overwriting both entries. Saving
    /// [`Session::Anonymous`] is the same as [`clear`](Self::clear).
    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Removes both entries. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn load(&self) -> Result<StoredSession, StoreError> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Encodes an authenticated session as its two entries.
///
/// Returns `None` for an anonymous session, which has no entries.
pub(crate) fn to_entries(
    session: &Session,
) -> Result<Option<BTreeMap<String, String>>, StoreError> {
    let Session::Authenticated { token, member } = session else {
        return Ok(None);
    };
    let member_json = serde_json::to_string(member).map_err(StoreError::Encode)?;

    let mut entries = BTreeMap::new();
    entries.insert(TOKEN_KEY.to_string(), token.clone());
    entries.insert(MEMBER_KEY.to_string(), member_json);
    Ok(Some(entries))
}

/// Decodes the two entries. An unparseable member is dropped (and
/// logged), leaving a token-only pair for the manager to reject.
pub(crate) fn from_entries(entries: &BTreeMap<String, String>) -> StoredSession {
    let token = entries.get(TOKEN_KEY).filter(|t| !t.is_empty()).cloned();
    let member = entries
        .get(MEMBER_KEY)
        .and_then(|raw| match serde_json::from_str::<Member>(raw) {
            Ok(member) => Some(member),
            Err(e) => {
                tracing::warn!(error = %e, "persisted member entry is malformed");
                None
            }
        });
    StoredSession { token, member }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_protocol::MemberId;

    fn member() -> Member {
        Member {
            id: MemberId::new("m1"),
            username: "alice".into(),
            cni: "AB123".into(),
            phone: "0600".into(),
            email: "alice@example.com".into(),
        }
    }

    #[test]
    fn test_to_entries_anonymous_has_none() {
        assert!(to_entries(&Session::Anonymous).unwrap().is_none());
    }

    #[test]
    fn test_to_entries_writes_both_keys() {
        let entries = to_entries(&Session::authenticated("t1", member()))
            .unwrap()
            .expect("authenticated session has entries");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[TOKEN_KEY], "t1");
        let decoded: Member = serde_json::from_str(&entries[MEMBER_KEY]).unwrap();
        assert_eq!(decoded, member());
    }

    #[test]
    fn test_from_entries_round_trips() {
        let session = Session::authenticated("t1", member());
        let entries = to_entries(&session).unwrap().unwrap();

        let stored = from_entries(&entries);

        assert_eq!(stored.into_session(), Some(session));
    }

    #[test]
    fn test_from_entries_malformed_member_drops_member() {
        let mut entries = BTreeMap::new();
        entries.insert(TOKEN_KEY.to_string(), "t1".to_string());
        entries.insert(MEMBER_KEY.to_string(), "{not json".to_string());

        let stored = from_entries(&entries);

        assert_eq!(stored.token.as_deref(), Some("t1"));
        assert!(stored.member.is_none());
    }

    #[test]
    fn test_from_entries_empty_map_is_empty() {
        assert!(from_entries(&BTreeMap::new()).is_empty());
    }
}
