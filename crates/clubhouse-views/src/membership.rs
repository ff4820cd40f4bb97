//! The join/leave button shown on every upcoming event.
//!
//! The button is a pure function of the session and the event: no I/O, no
//! state of its own.

use clubhouse_protocol::Event;
use clubhouse_session::Session;

pub const JOIN_LABEL: &str = "S'inscrire";
pub const LEAVE_LABEL: &str = "Se désinscrire";
pub const FULL_LABEL: &str = "Complet";

/// What pressing the button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Join the event.
    Join,
    /// Leave the event.
    Leave,
    /// Nobody is signed in: send the visitor to the sign-up page.
    SignUp,
    /// Disabled.
    None,
}

/// Label, enabled flag, and action of the membership button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipButton {
    pub label: &'static str,
    pub enabled: bool,
    pub action: ButtonAction,
}

impl MembershipButton {
    /// Decides the button for `event` as seen by `session`.
    ///
    /// | Situation                     | Label          | Enabled | Action |
    /// |-------------------------------|----------------|---------|--------|
    /// | member of the event           | Se désinscrire | yes     | Leave  |
    /// | not a member, event full      | Complet        | no      | None   |
    /// | signed in, seats left         | S'inscrire     | yes     | Join   |
    /// | anonymous, seats left         | S'inscrire     | yes     | SignUp |
    ///
    /// A member can always leave, even when the event is full.
    pub fn for_event(session: &Session, event: &Event) -> Self {
        let is_member = session
            .member()
            .is_some_and(|member| event.has_member(&member.id));

        if is_member {
            return Self {
                label: LEAVE_LABEL,
                enabled: true,
                action: ButtonAction::Leave,
            };
        }
        if event.is_full() {
            return Self {
                label: FULL_LABEL,
                enabled: false,
                action: ButtonAction::None,
            };
        }

        let action = if session.is_authenticated() {
            ButtonAction::Join
        } else {
            ButtonAction::SignUp
        };
        Self {
            label: JOIN_LABEL,
            enabled: true,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_protocol::{Activity, EventId, Member, MemberId};

    fn event(limit: u32, members: &[&str]) -> Event {
        Event {
            id: EventId::new("E1"),
            activity: Activity::Robotics,
            title: "Atelier".into(),
            description: String::new(),
            date: None,
            location: "Salle 1".into(),
            member_limit: limit,
            members: members.iter().map(|m| MemberId::new(*m)).collect(),
        }
    }

    fn signed_in(id: &str) -> Session {
        Session::authenticated(
            "t1",
            Member {
                id: MemberId::new(id),
                username: id.into(),
                cni: String::new(),
                phone: String::new(),
                email: String::new(),
            },
        )
    }

    #[test]
    fn test_for_event_member_can_leave() {
        let button = MembershipButton::for_event(&signed_in("a"), &event(5, &["a"]));
        assert_eq!(button.label, "Se désinscrire");
        assert!(button.enabled);
        assert_eq!(button.action, ButtonAction::Leave);
    }

    #[test]
    fn test_for_event_member_of_full_event_can_still_leave() {
        let full = event(2, &["a", "b"]);
        assert!(full.is_full());

        let button = MembershipButton::for_event(&signed_in("a"), &full);

        assert_eq!(button.action, ButtonAction::Leave);
        assert!(button.enabled);
    }

    #[test]
    fn test_for_event_full_disables_for_non_member() {
        let button = MembershipButton::for_event(&signed_in("c"), &event(2, &["a", "b"]));
        assert_eq!(button.label, "Complet");
        assert!(!button.enabled);
        assert_eq!(button.action, ButtonAction::None);
    }

    #[test]
    fn test_for_event_signed_in_open_joins() {
        let button = MembershipButton::for_event(&signed_in("c"), &event(2, &["a"]));
        assert_eq!(button.label, "S'inscrire");
        assert!(button.enabled);
        assert_eq!(button.action, ButtonAction::Join);
    }

    #[test]
    fn test_for_event_anonymous_open_redirects_to_sign_up() {
        let button = MembershipButton::for_event(&Session::Anonymous, &event(2, &[]));
        assert_eq!(button.label, "S'inscrire");
        assert!(button.enabled);
        assert_eq!(button.action, ButtonAction::SignUp);
    }

    #[test]
    fn test_for_event_anonymous_full_is_disabled() {
        let button = MembershipButton::for_event(&Session::Anonymous, &event(1, &["a"]));
        assert_eq!(button.label, "Complet");
        assert!(!button.enabled);
    }

    #[test]
    fn test_for_event_zero_limit_is_full() {
        let button = MembershipButton::for_event(&signed_in("a"), &event(0, &[]));
        assert_eq!(button.action, ButtonAction::None);
    }
}
