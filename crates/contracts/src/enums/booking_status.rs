use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Status of a facility reservation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Approved,
    Processing,
    Pending,
    Rejected,
    Unrecognized(String),
}

impl Taxonomy for BookingStatus {
    fn all() -> Vec<Self> {
        vec![
            BookingStatus::Approved,
            BookingStatus::Processing,
            BookingStatus::Pending,
            BookingStatus::Rejected,
        ]
    }

    fn label(&self) -> &str {
        match self {
            BookingStatus::Approved => "Approved",
            BookingStatus::Processing => "Processing",
            BookingStatus::Pending => "Pending",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            BookingStatus::Approved => BadgeSpec::new(DisplayVariant::Default, IconKind::CheckCircle),
            BookingStatus::Processing => BadgeSpec::new(DisplayVariant::Warning, IconKind::Clock),
            BookingStatus::Pending => BadgeSpec::new(DisplayVariant::Secondary, IconKind::AlertTriangle),
            BookingStatus::Rejected => BadgeSpec::new(DisplayVariant::Destructive, IconKind::XCircle),
            BookingStatus::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Secondary, IconKind::Clock)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "Approved" => BookingStatus::Approved,
            "Processing" => BookingStatus::Processing,
            "Pending" => BookingStatus::Pending,
            "Rejected" => BookingStatus::Rejected,
            other => BookingStatus::Unrecognized(other.to_string()),
        }
    }
}

impl BookingStatus {
    /// Bookings that hold the facility on their date
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, BookingStatus::Rejected | BookingStatus::Unrecognized(_))
    }
}

impl From<String> for BookingStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_uses_triangle_icon() {
        let badge = BookingStatus::Pending.badge();
        assert_eq!(badge.variant, DisplayVariant::Secondary);
        assert_eq!(badge.icon, IconKind::AlertTriangle);
    }

    #[test]
    fn test_rejected_does_not_occupy_slot() {
        assert!(BookingStatus::Approved.occupies_slot());
        assert!(BookingStatus::Pending.occupies_slot());
        assert!(!BookingStatus::Rejected.occupies_slot());
        assert!(!BookingStatus::from_label("Cancelled").occupies_slot());
    }
}
