//! User-facing notifications for join/leave outcomes.

use std::fmt;

use crate::MembershipError;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Confirmation of something that worked.
    Default,
    /// Something failed and the user should know.
    Destructive,
}

/// A short notification: a title, a one-line description, and a tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

/// Which membership operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    Join,
    Leave,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            tone,
        }
    }

    /// Notice for a successful join or leave, with the server's message.
    pub fn success(action: MembershipAction, server_message: impl Into<String>) -> Self {
        let title = match action {
            MembershipAction::Join => "Inscription réussie à l'événement",
            MembershipAction::Leave => "Désinscription réussie de l'événement",
        };
        Self::new(title, server_message, Tone::Default)
    }

    /// Notice for a failed join or leave.
    pub fn failure(action: MembershipAction, error: &MembershipError) -> Self {
        match error {
            MembershipError::Rejected(message) => {
                let title = match action {
                    MembershipAction::Join => "Échec de l'inscription à l'événement",
                    MembershipAction::Leave => "Échec du désinscription de l'événement",
                };
                Self::new(title, message.clone(), Tone::Destructive)
            }
            MembershipError::Network(_) | MembershipError::Protocol(_) => Self::new(
                "Erreur réseau",
                "Impossible de contacter le serveur.",
                Tone::Destructive,
            ),
            MembershipError::NotAuthenticated => Self::new(
                "Connexion requise",
                "Connectez-vous pour vous inscrire aux événements.",
                Tone::Destructive,
            ),
        }
    }

    /// Returns `true` for failure notices.
    pub fn is_destructive(&self) -> bool {
        self.tone == Tone::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}: {}", self.title, self.description)
        }
    }
}
