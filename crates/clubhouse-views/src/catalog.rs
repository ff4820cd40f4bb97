//! Static site content: the activity catalog, social links, and the
//! call-to-action shown to visitors who are not signed in.

use clubhouse_protocol::Activity;
use clubhouse_session::Session;

/// One activity as presented on the activities page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityInfo {
    pub activity: Activity,
    pub title: &'static str,
    pub description: &'static str,
    /// "Ce que nous offrons"
    pub features: &'static [&'static str],
    pub partners: &'static str,
    pub duration: &'static str,
    /// Eligibility note, when the activity is restricted.
    pub note: Option<&'static str>,
}

/// The four activities, in page order.
pub const ACTIVITIES: [ActivityInfo; 4] = [
    ActivityInfo {
        activity: Activity::Robotics,
        title: "Robotique",
        description: "Construisez, programmez et pilotez des robots pour participer à des \
                      compétitions nationales et internationales.",
        features: &[
            "Ateliers de formations",
            "Ateliers de suivre",
            "Des compétition locale, nationale ou même internationale",
        ],
        partners: "ATDTech (Ouikassi)",
        duration: "De Décembre à Mars",
        note: None,
    },
    ActivityInfo {
        activity: Activity::Chess,
        title: "Échecs & Rubik's Cube",
        description: "Développez vos capacités de réflexion stratégique et de résolution de \
                      problèmes à travers les échecs et le Rubik's cube.",
        features: &[
            "Ateliers de formations",
            "Ateliers de suivre",
            "Ateliers pour jouer",
            "Des compétition locale, nationale ou même internationale",
        ],
        partners: "La ligue régional Marrakech Safi des échecs",
        duration: "De Décembre à Avril",
        note: None,
    },
    ActivityInfo {
        activity: Activity::TipePrize,
        title: "Prix du meilleur TIPE",
        description: "Participez à la compétition du meilleur TIPE et présentez vos travaux de \
                      recherche scientifique devant un jury d'experts.",
        features: &["Lancement du thème", "Encadrement & Motivation"],
        partners: "coming soon",
        duration: "coming soon",
        note: Some(
            "Activité réservée uniquement aux étudiants scientifique de deuxième année.",
        ),
    },
    ActivityInfo {
        activity: Activity::Innovation,
        title: "Ateliers d'innovation",
        description: "Stimulez votre créativité et développez des projets innovants en équipe, \
                      en explorant de nouvelles technologies et en transformant vos idées en \
                      prototypes concrets.",
        features: &[
            "Ateliers structurés en créativité, design thinking et résolution de problèmes",
            "Mini-projets réalisés en groupes",
            "Accompagnement par des experts",
            "Présentations finales des projets",
        ],
        partners: "Experts et enseignants du LIT",
        duration: "De Décembre à Avril",
        note: None,
    },
];

/// Catalog entry for `activity`.
pub fn activity_info(activity: Activity) -> &'static ActivityInfo {
    match activity {
        Activity::Robotics => &ACTIVITIES[0],
        Activity::Chess => &ACTIVITIES[1],
        Activity::TipePrize => &ACTIVITIES[2],
        Activity::Innovation => &ACTIVITIES[3],
    }
}

/// A link to one of the club's social accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/club.scientifique.tech",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/company/club.scientifique.tech/",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/CST-web",
    },
];

pub const CONTACT_EMAIL: &str = "club.scientifique.tech@gmail.com";

/// Invitation to join the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub title: &'static str,
    pub text: &'static str,
    pub button: &'static str,
    /// Route of the sign-up page.
    pub target: &'static str,
}

const JOIN_CALL_TO_ACTION: CallToAction = CallToAction {
    title: "Prêt à Commencer ?",
    text: "Rejoignez-nous et découvrez toutes nos activités passionnantes",
    button: "Nous Rejoindre",
    target: "/join",
};

/// The call-to-action under the activity list. Members already joined,
/// so they don't get one.
pub fn call_to_action(session: &Session) -> Option<CallToAction> {
    (!session.is_authenticated()).then_some(JOIN_CALL_TO_ACTION)
}
