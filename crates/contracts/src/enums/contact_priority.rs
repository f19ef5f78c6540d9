use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Four-level urgency of a hotline contact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactPriority {
    Critical,
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Taxonomy for ContactPriority {
    fn all() -> Vec<Self> {
        vec![
            ContactPriority::Critical,
            ContactPriority::High,
            ContactPriority::Medium,
            ContactPriority::Low,
        ]
    }

    fn label(&self) -> &str {
        match self {
            ContactPriority::Critical => "critical",
            ContactPriority::High => "high",
            ContactPriority::Medium => "medium",
            ContactPriority::Low => "low",
            ContactPriority::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            ContactPriority::Critical => BadgeSpec::new(DisplayVariant::Destructive, IconKind::AlertTriangle),
            ContactPriority::High => BadgeSpec::new(DisplayVariant::Warning, IconKind::AlertCircle),
            ContactPriority::Medium => BadgeSpec::new(DisplayVariant::Secondary, IconKind::Phone),
            ContactPriority::Low => BadgeSpec::new(DisplayVariant::Outline, IconKind::Phone),
            ContactPriority::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Outline, IconKind::Phone)
    }

    fn from_label(label: &str) -> Self {
        match label {
            "critical" => ContactPriority::Critical,
            "high" => ContactPriority::High,
            "medium" => ContactPriority::Medium,
            "low" => ContactPriority::Low,
            other => ContactPriority::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ContactPriority {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ContactPriority> for String {
    fn from(priority: ContactPriority) -> Self {
        priority.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_priority_is_outline() {
        let badge = ContactPriority::from_label("urgent").badge();
        assert_eq!(badge.variant, DisplayVariant::Outline);
    }

    #[test]
    fn test_critical_is_destructive() {
        assert_eq!(
            ContactPriority::from_label("critical").badge().variant,
            DisplayVariant::Destructive
        );
    }
}
