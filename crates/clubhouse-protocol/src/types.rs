//! Core protocol types for the club API's wire format.
//!
//! Every type here is something the server sends or receives as JSON.
//! Field names follow the server: MongoDB-style `_id` keys and a
//! camel-case `memberLimit`. Rust-side names are snake case and the
//! serde attributes do the translation.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Declares an opaque string identifier newtype.
///
/// The server hands out ids as strings and never expects the client to
/// interpret them, so each one is a transparent wrapper: `MemberId("m1")`
/// serializes as just `"m1"`.
macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an id from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a registered club member.
    MemberId
);
string_id!(
    /// Identifier of a club event.
    EventId
);
string_id!(
    /// Identifier of a gallery album.
    AlbumId
);
string_id!(
    /// Identifier of one image in the gallery storage.
    ImageId
);

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// The club's four activity categories.
///
/// On the wire these are French display labels. The gallery used the
/// short label `"Innovation"` for the innovation workshops, so that label
/// is accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Échecs")]
    Chess,
    #[serde(rename = "Robotique")]
    Robotics,
    #[serde(rename = "Prix du meilleur TIPE")]
    TipePrize,
    #[serde(rename = "Ateliers d'innovation", alias = "Innovation")]
    Innovation,
}

impl Activity {
    /// Every category, in the order the site presents them.
    pub const ALL: [Activity; 4] = [
        Activity::Robotics,
        Activity::Chess,
        Activity::TipePrize,
        Activity::Innovation,
    ];

    /// The display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chess => "Échecs",
            Self::Robotics => "Robotique",
            Self::TipePrize => "Prix du meilleur TIPE",
            Self::Innovation => "Ateliers d'innovation",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Members and credentials
// ---------------------------------------------------------------------------

/// A member's profile as returned by the login endpoint.
///
/// This is the registration payload minus the password, plus the id the
/// server assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: MemberId,
    pub username: String,
    /// National identity card number.
    #[serde(default)]
    pub cni: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Fields submitted when signing up.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub username: String,
    /// National identity card number.
    pub cni: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("username", &self.username)
            .field("cni", &self.cni)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Username and password submitted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a login response.
///
/// Both fields are optional at decode time so that an incomplete answer
/// is reported as a missing field rather than a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub member: Option<Member>,
}

impl LoginResponse {
    /// Splits the response into its token and member.
    ///
    /// # Errors
    /// Returns [`ProtocolError::MissingField`] if either part is absent.
    /// An empty token string counts as absent.
    pub fn into_parts(self) -> Result<(String, Member), ProtocolError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ProtocolError::MissingField("token"))?;
        let member = self.member.ok_or(ProtocolError::MissingField("member"))?;
        Ok((token, member))
    }
}

/// Body of an error response: `{ "message": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extracts a non-empty server message from a raw response body.
    ///
    /// Returns `None` for empty bodies, non-JSON bodies, and bodies
    /// without a usable `message`.
    #[cfg(feature = "json")]
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()?
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A scheduled club activity with a capacity and a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: EventId,
    pub activity: Activity,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// When the event takes place. `None` means it is ongoing.
    #[serde(
        default,
        deserialize_with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "memberLimit")]
    pub member_limit: u32,
    /// Ids of registered members. Duplicates on the wire are collapsed.
    #[serde(default, deserialize_with = "unique_members")]
    pub members: Vec<MemberId>,
}

impl Event {
    /// Returns `true` once the roster has reached the member limit.
    ///
    /// The limit is enforced by the server; this only reflects what the
    /// last response said.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.member_limit as usize
    }

    /// Returns `true` if `member` is on the roster.
    pub fn has_member(&self, member: &MemberId) -> bool {
        self.members.contains(member)
    }

    /// Number of seats taken.
    pub fn seats_taken(&self) -> usize {
        self.members.len()
    }

    /// Overwrites every field present in `patch`.
    ///
    /// The server's sub-document is authoritative: a patched `members`
    /// list replaces the local one wholesale.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(activity) = patch.activity {
            self.activity = activity;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(limit) = patch.member_limit {
            self.member_limit = limit;
        }
        if let Some(members) = patch.members {
            self.members = dedup_members(members);
        }
    }
}

/// A partial event, as returned by the join and leave endpoints.
///
/// Absent fields leave the local event untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPatch {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        deserialize_with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "memberLimit", skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberId>>,
}

/// Body of a successful join or leave: `{ message, event }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MembershipResponse {
    #[serde(default)]
    pub message: String,
    pub event: EventPatch,
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// A read-only gallery album: an ordered set of image references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "_id")]
    pub id: AlbumId,
    #[serde(alias = "category")]
    pub activity: Activity,
    pub title: String,
    /// When the photos were taken, as the server words it (`"Mars 2024"`).
    /// Shown as is, never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageId>,
    pub thumbnail: ImageId,
}

impl Album {
    /// Number of photos in the album.
    pub fn photo_count(&self) -> usize {
        self.images.len()
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Parses a server date.
///
/// Accepts RFC 3339 (`2025-03-05T14:30:00.000Z`), a zone-less date-time
/// (taken as UTC), or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `null`, a missing key, and `""` all mean "no date".
///
/// An unparseable date is also dropped, so one bad record cannot fail a
/// whole list.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => {
            let date = parse_date(s);
            if date.is_none() {
                tracing::warn!(raw = s, "ignoring unparseable date");
            }
            Ok(date)
        }
    }
}

fn unique_members<'de, D>(deserializer: D) -> Result<Vec<MemberId>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<MemberId>::deserialize(deserializer).map(dedup_members)
}

/// Drops repeated ids, keeping the first occurrence of each.
fn dedup_members(members: Vec<MemberId>) -> Vec<MemberId> {
    let mut seen = std::collections::HashSet::with_capacity(members.len());
    members
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}
