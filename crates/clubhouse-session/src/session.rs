//! Session types: what the client knows about who is signed in.
//!
//! A session is either anonymous or holds BOTH a token and the member it
//! belongs to. There is no way to build a `Session` with a member but no
//! token, or the reverse; partial data read back from storage is kept in
//! a separate [`StoredSession`] until it has been validated.

use std::fmt;

use clubhouse_protocol::Member;

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The two states of the session state machine.
///
/// ```text
///   Anonymous ──(login)──→ Authenticated
///       ↑                        │
///       └────────(logout)────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "Anonymous"),
            Self::Authenticated => write!(f, "Authenticated"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The client-held record of the current authentication.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,

    /// A member is signed in. `token` is sent as the bearer credential on
    /// protected routes.
    Authenticated { token: String, member: Member },
}

impl Session {
    /// Creates an authenticated session.
    pub fn authenticated(token: impl Into<String>, member: Member) -> Self {
        Self::Authenticated {
            token: token.into(),
            member,
        }
    }

    /// The bearer token, if signed in.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token, .. } => Some(token),
        }
    }

    /// The signed-in member, if any.
    pub fn member(&self) -> Option<&Member> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { member, .. } => Some(member),
        }
    }

    /// Returns `true` if a member is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The state-machine state this session is in.
    pub fn state(&self) -> SessionState {
        match self {
            Self::Anonymous => SessionState::Anonymous,
            Self::Authenticated { .. } => SessionState::Authenticated,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => write!(f, "Anonymous"),
            Self::Authenticated { member, .. } => f
                .debug_struct("Authenticated")
                .field("token", &"<redacted>")
                .field("member", &member.id)
                .finish(),
        }
    }
}

// ---------------------------------------------------------------------------
// StoredSession
// ---------------------------------------------------------------------------

/// The raw token/member pair as read back from a [`SessionStore`].
///
/// Stores written by older clients, or damaged on disk, can hold only one
/// half of the pair. [`into_session`](Self::into_session) decides whether
/// the pair is usable.
///
/// [`SessionStore`]: crate::SessionStore
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub member: Option<Member>,
}

impl StoredSession {
    /// Returns `true` if neither half is present.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.member.is_none()
    }

    /// Converts the pair into a session.
    ///
    /// - both halves → `Some(Authenticated)`
    /// - neither → `Some(Anonymous)`
    /// - only one → `None`: the pair is invalid and must be discarded
    pub fn into_session(self) -> Option<Session> {
        match (self.token, self.member) {
            (Some(token), Some(member)) if !token.is_empty() => {
                Some(Session::authenticated(token, member))
            }
            (None, None) => Some(Session::Anonymous),
            _ => None,
        }
    }
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token().map(str::to_string),
            member: session.member().cloned(),
        }
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("member", &self.member.as_ref().map(|m| &m.id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_protocol::MemberId;

    fn member(id: &str) -> Member {
        Member {
            id: MemberId::new(id),
            username: "alice".into(),
            cni: "AB123".into(),
            phone: "0600000000".into(),
            email: "alice@example.com".into(),
        }
    }

    #[test]
    fn test_session_default_is_anonymous() {
        let session = Session::default();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.token().is_none());
        assert!(session.member().is_none());
    }

    #[test]
    fn test_session_authenticated_exposes_both_halves() {
        let session = Session::authenticated("t1", member("m1"));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.member().map(|m| &m.id), Some(&MemberId::new("m1")));
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let printed = format!("{:?}", Session::authenticated("secret-token", member("m1")));
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("m1"));
    }

    #[test]
    fn test_stored_session_complete_pair_is_authenticated() {
        let stored = StoredSession {
            token: Some("t1".into()),
            member: Some(member("m1")),
        };
        assert_eq!(
            stored.into_session(),
            Some(Session::authenticated("t1", member("m1")))
        );
    }

    #[test]
    fn test_stored_session_empty_pair_is_anonymous() {
        assert_eq!(
            StoredSession::default().into_session(),
            Some(Session::Anonymous)
        );
    }

    #[test]
    fn test_stored_session_token_only_is_invalid() {
        let stored = StoredSession {
            token: Some("t1".into()),
            member: None,
        };
        assert_eq!(stored.into_session(), None);
    }

    #[test]
    fn test_stored_session_member_only_is_invalid() {
        let stored = StoredSession {
            token: None,
            member: Some(member("m1")),
        };
        assert_eq!(stored.into_session(), None);
    }

    #[test]
    fn test_stored_session_empty_token_is_invalid() {
        let stored = StoredSession {
            token: Some(String::new()),
            member: Some(member("m1")),
        };
        assert_eq!(stored.into_session(), None);
    }

    #[test]
    fn test_stored_session_from_session_round_trips() {
        let session = Session::authenticated("t1", member("m1"));
        let stored = StoredSession::from(&session);
        assert_eq!(stored.into_session(), Some(session));

        let stored = StoredSession::from(&Session::Anonymous);
        assert!(stored.is_empty());
    }
}
