use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Registration status of a resident
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResidentStatus {
    Active,
    Inactive,
    Relocated,
    Unrecognized(String),
}

impl Taxonomy for ResidentStatus {
    fn all() -> Vec<Self> {
        vec![
            ResidentStatus::Active,
            ResidentStatus::Inactive,
            ResidentStatus::Relocated,
        ]
    }

    fn label(&self) -> &str {
        match self {
            ResidentStatus::Active => "Active",
            ResidentStatus::Inactive => "Inactive",
            ResidentStatus::Relocated => "Relocated",
            ResidentStatus::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            ResidentStatus::Active => BadgeSpec::new(DisplayVariant::Default, IconKind::UserCheck),
            ResidentStatus::Inactive => BadgeSpec::new(DisplayVariant::Secondary, IconKind::UserX),
            ResidentStatus::Relocated => BadgeSpec::new(DisplayVariant::Outline, IconKind::MapPin),
            ResidentStatus::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Secondary, IconKind::User)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "Active" => ResidentStatus::Active,
            "Inactive" => ResidentStatus::Inactive,
            "Relocated" => ResidentStatus::Relocated,
            other => ResidentStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ResidentStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ResidentStatus> for String {
    fn from(status: ResidentStatus) -> Self {
        status.label().to_string()
    }
}
