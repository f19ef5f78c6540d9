use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Status of an e-service application (clearance, certificate, permit)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Approved,
    Processing,
    Pending,
    Rejected,
    Unrecognized(String),
}

impl Taxonomy for RequestStatus {
    fn all() -> Vec<Self> {
        vec![
            RequestStatus::Approved,
            RequestStatus::Processing,
            RequestStatus::Pending,
            RequestStatus::Rejected,
        ]
    }

    fn label(&self) -> &str {
        match self {
            RequestStatus::Approved => "Approved",
            RequestStatus::Processing => "Processing",
            RequestStatus::Pending => "Pending",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            RequestStatus::Approved => BadgeSpec::new(DisplayVariant::Default, IconKind::CheckCircle),
            RequestStatus::Processing => BadgeSpec::new(DisplayVariant::Warning, IconKind::Clock),
            RequestStatus::Pending => BadgeSpec::new(DisplayVariant::Secondary, IconKind::AlertCircle),
            RequestStatus::Rejected => BadgeSpec::new(DisplayVariant::Destructive, IconKind::XCircle),
            RequestStatus::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Secondary, IconKind::Clock)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "Approved" => RequestStatus::Approved,
            "Processing" => RequestStatus::Processing,
            "Pending" => RequestStatus::Pending,
            "Rejected" => RequestStatus::Rejected,
            other => RequestStatus::Unrecognized(other.to_string()),
        }
    }
}

impl RequestStatus {
    /// Approved documents can be downloaded from the tracking view
    pub fn is_downloadable(&self) -> bool {
        matches!(self, RequestStatus::Approved)
    }
}

impl From<String> for RequestStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges() {
        assert_eq!(RequestStatus::Approved.badge().variant, DisplayVariant::Default);
        assert_eq!(RequestStatus::Processing.badge().variant, DisplayVariant::Warning);
        assert_eq!(RequestStatus::Pending.badge().icon, IconKind::AlertCircle);
        assert_eq!(RequestStatus::Rejected.badge().variant, DisplayVariant::Destructive);
        assert_eq!(
            RequestStatus::from_label("approved").badge(),
            RequestStatus::fallback()
        );
    }

    #[test]
    fn test_only_approved_is_downloadable() {
        let downloadable: Vec<RequestStatus> = RequestStatus::all()
            .into_iter()
            .filter(RequestStatus::is_downloadable)
            .collect();
        assert_eq!(downloadable, vec![RequestStatus::Approved]);
    }
}
