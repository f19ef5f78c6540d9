use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Outcome shown next to an entry in the account activity feed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityStatus {
    Completed,
    Approved,
    InProgress,
    Pending,
    Unrecognized(String),
}

impl Taxonomy for ActivityStatus {
    fn all() -> Vec<Self> {
        vec![
            ActivityStatus::Completed,
            ActivityStatus::Approved,
            ActivityStatus::InProgress,
            ActivityStatus::Pending,
        ]
    }

    fn label(&self) -> &str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Approved => "Approved",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Pending => "Pending",
            ActivityStatus::Unrecognized(label) => label,
        }
    }

    // Anything not yet finished reads as "warning" in the feed
    fn badge(&self) -> BadgeSpec {
        match self {
            ActivityStatus::Completed | ActivityStatus::Approved => {
                BadgeSpec::new(DisplayVariant::Default, IconKind::CheckCircle)
            }
            ActivityStatus::InProgress => BadgeSpec::new(DisplayVariant::Warning, IconKind::Clock),
            ActivityStatus::Pending => BadgeSpec::new(DisplayVariant::Warning, IconKind::AlertCircle),
            ActivityStatus::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Warning, IconKind::Clock)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "Completed" => ActivityStatus::Completed,
            "Approved" => ActivityStatus::Approved,
            "In Progress" => ActivityStatus::InProgress,
            "Pending" => ActivityStatus::Pending,
            other => ActivityStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ActivityStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ActivityStatus> for String {
    fn from(status: ActivityStatus) -> Self {
        status.label().to_string()
    }
}
