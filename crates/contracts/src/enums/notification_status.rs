use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Read state of an account notification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationStatus {
    Unread,
    Read,
    Unrecognized(String),
}

impl Taxonomy for NotificationStatus {
    fn all() -> Vec<Self> {
        vec![NotificationStatus::Unread, NotificationStatus::Read]
    }

    fn label(&self) -> &str {
        match self {
            NotificationStatus::Unread => "Unread",
            NotificationStatus::Read => "Read",
            NotificationStatus::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            NotificationStatus::Unread => BadgeSpec::new(DisplayVariant::Destructive, IconKind::Bell),
            NotificationStatus::Read => BadgeSpec::new(DisplayVariant::Outline, IconKind::MailOpen),
            NotificationStatus::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Outline, IconKind::Bell)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "Unread" => NotificationStatus::Unread,
            "Read" => NotificationStatus::Read,
            other => NotificationStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for NotificationStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<NotificationStatus> for String {
    fn from(status: NotificationStatus) -> Self {
        status.label().to_string()
    }
}
