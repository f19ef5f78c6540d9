use crate::shared::catalog::{BadgeSpec, DisplayVariant, IconKind, Taxonomy};
use serde::{Deserialize, Serialize};

/// Three-level priority used by incident reports and announcements.
///
/// Labels are matched ignoring ASCII case: fixtures write "High", the report
/// form submits "high".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Unrecognized(String),
}

impl Taxonomy for Priority {
    fn all() -> Vec<Self> {
        vec![Priority::High, Priority::Medium, Priority::Low]
    }

    fn label(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unrecognized(label) => label,
        }
    }

    fn badge(&self) -> BadgeSpec {
        match self {
            Priority::High => BadgeSpec::new(DisplayVariant::Destructive, IconKind::AlertTriangle),
            Priority::Medium => BadgeSpec::new(DisplayVariant::Warning, IconKind::AlertCircle),
            Priority::Low => BadgeSpec::new(DisplayVariant::Secondary, IconKind::Clock),
            Priority::Unrecognized(_) => Self::fallback(),
        }
    }

    fn fallback() -> BadgeSpec {
        BadgeSpec::new(DisplayVariant::Secondary, IconKind::Clock)
    }

    fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label))
            .unwrap_or_else(|| Priority::Unrecognized(label.to_string()))
    }
}

impl Priority {
    /// Value submitted by the priority select on the report form
    pub fn form_value(&self) -> String {
        self.label().to_ascii_lowercase()
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_labels() {
        assert_eq!(Priority::from_label("high"), Priority::High);
        assert_eq!(Priority::from_label("MEDIUM"), Priority::Medium);
        assert_eq!(Priority::from_label("Low"), Priority::Low);
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(Priority::High.badge().variant, DisplayVariant::Destructive);
        assert_eq!(Priority::Medium.badge().variant, DisplayVariant::Warning);
        assert_eq!(Priority::Low.badge().variant, DisplayVariant::Secondary);
        assert_eq!(
            Priority::from_label("urgent").badge().variant,
            DisplayVariant::Secondary
        );
    }

    #[test]
    fn test_form_value_parses_back() {
        for priority in Priority::all() {
            assert_eq!(Priority::from_label(&priority.form_value()), priority);
        }
    }
}
