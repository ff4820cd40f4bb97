//! The club API's route table.
//!
//! Every call the client makes is one of these endpoints. Keeping the
//! method, path, and auth requirement together means no other crate
//! formats a URL by hand.

use clubhouse_transport::{ApiRequest, Method};

use crate::EventId;

/// One route of the club API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /members/`: sign up.
    Register,
    /// `POST /members/login/`: exchange credentials for a token.
    Login,
    /// `GET /events`: list all events.
    ListEvents,
    /// `POST /events/join/{id}`: join an event (bearer token).
    JoinEvent(EventId),
    /// `POST /events/leave/{id}`: leave an event (bearer token).
    LeaveEvent(EventId),
    /// `GET /gallery`: list all albums.
    ListGallery,
}

impl Endpoint {
    /// HTTP method for this route.
    pub fn method(&self) -> Method {
        match self {
            Self::ListEvents | Self::ListGallery => Method::Get,
            Self::Register | Self::Login | Self::JoinEvent(_) | Self::LeaveEvent(_) => {
                Method::Post
            }
        }
    }

    /// Path below the API base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Register => "/members/".to_string(),
            Self::Login => "/members/login/".to_string(),
            Self::ListEvents => "/events".to_string(),
            Self::JoinEvent(id) => format!("/events/join/{}", encode_segment(id.as_str())),
            Self::LeaveEvent(id) => format!("/events/leave/{}", encode_segment(id.as_str())),
            Self::ListGallery => "/gallery".to_string(),
        }
    }

    /// Returns `true` if the route needs a bearer token.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::JoinEvent(_) | Self::LeaveEvent(_))
    }

    /// Builds a bodiless request for this route.
    pub fn request(&self) -> ApiRequest {
        ApiRequest {
            method: self.method(),
            path: self.path(),
            bearer: None,
            body: None,
        }
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set, so an
/// id can never escape its path segment.
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_matches_api() {
        let id = EventId::new("65f0c2");
        let cases = [
            (Endpoint::Register, Method::Post, "/members/", false),
            (Endpoint::Login, Method::Post, "/members/login/", false),
            (Endpoint::ListEvents, Method::Get, "/events", false),
            (
                Endpoint::JoinEvent(id.clone()),
                Method::Post,
                "/events/join/65f0c2",
                true,
            ),
            (
                Endpoint::LeaveEvent(id),
                Method::Post,
                "/events/leave/65f0c2",
                true,
            ),
            (Endpoint::ListGallery, Method::Get, "/gallery", false),
        ];

        for (endpoint, method, path, auth) in cases {
            assert_eq!(endpoint.method(), method, "{endpoint:?}");
            assert_eq!(endpoint.path(), path, "{endpoint:?}");
            assert_eq!(endpoint.requires_auth(), auth, "{endpoint:?}");
        }
    }

    #[test]
    fn test_request_carries_method_and_path() {
        let req = Endpoint::ListGallery.request();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/gallery");
        assert!(req.bearer.is_none());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_event_id_cannot_escape_path_segment() {
        let endpoint = Endpoint::JoinEvent(EventId::new("../members/x y"));
        assert_eq!(endpoint.path(), "/events/join/..%2Fmembers%2Fx%20y");
    }
}
