use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Progress of an incident report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    Pending,
    UnderInvestigation,
    InProgress,
    Resolved,
    Unrecognized(String),
}

impl Taxonomy for ReportStatus {
    fn all() -> Vec<Self> {
        vec![
            ReportStatus::Pending,
            ReportStatus::UnderInvestigation,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
        ]
    }

    fn label(&self) -> &str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::UnderInvestigation => "Under Investigation",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            ReportStatus::Resolved => BadgeSpec::new(DisplayVariant::Default, IconKind::CheckCircle),
            ReportStatus::InProgress => BadgeSpec::new(DisplayVariant::Warning, IconKind::Clock),
            ReportStatus::UnderInvestigation => {
                BadgeSpec::new(DisplayVariant::Secondary, IconKind::Search)
            }
            ReportStatus::Pending => BadgeSpec::new(DisplayVariant::Secondary, IconKind::AlertCircle),
            ReportStatus::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Secondary, IconKind::Clock)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "Pending" => ReportStatus::Pending,
            "Under Investigation" => ReportStatus::UnderInvestigation,
            "In Progress" => ReportStatus::InProgress,
            "Resolved" => ReportStatus::Resolved,
            other => ReportStatus::Unrecognized(other.to_string()),
        }
    }
}

impl ReportStatus {
    /// Still awaiting action from barangay staff
    pub fn is_open(&self) -> bool {
        !matches!(self, ReportStatus::Resolved)
    }
}

impl From<String> for ReportStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        status.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_is_default_with_check() {
        let badge = ReportStatus::from_label("Resolved").badge();
        assert_eq!(badge.variant, DisplayVariant::Default);
        assert_eq!(badge.icon, IconKind::CheckCircle);
    }

    #[test]
    fn test_only_resolved_is_closed() {
        assert!(!ReportStatus::Resolved.is_open());
        assert!(ReportStatus::Pending.is_open());
        assert!(ReportStatus::UnderInvestigation.is_open());
        assert!(ReportStatus::from_label("Escalated").is_open());
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let status = ReportStatus::from_label("Escalated to Municipality");
        assert!(!status.is_recognized());
        assert_eq!(status.label(), "Escalated to Municipality");
        assert_eq!(status.badge().variant, DisplayVariant::Secondary);
    }

    #[test]
    fn test_labels_round_trip() {
        for status in ReportStatus::all() {
            assert_eq!(ReportStatus::from_label(status.label()), status);
        }
    }

    #[test]
    fn test_deserializes_from_plain_label() {
        let status: ReportStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, ReportStatus::InProgress);
        let status: ReportStatus = serde_json::from_str("\"on hold\"").unwrap();
        assert_eq!(status, ReportStatus::Unrecognized("on hold".to_string()));
    }
}
