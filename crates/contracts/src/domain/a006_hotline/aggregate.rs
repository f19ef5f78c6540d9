use crate::domain::common::{Categorized, Domain, Record, RecordId};
use crate::enums::ContactPriority;
use crate::shared::catalog::{IconKind, Searchable};
use serde::{Deserialize, Serialize};

/// A phone contact in the hotline directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotlineContact {
    pub id: RecordId,
    /// Directory section, e.g. "Law Enforcement"
    pub category: String,
    pub name: String,
    /// Number as printed, e.g. "(046) 234-5678"
    pub number: String,
    pub description: String,
    pub icon: IconKind,
    pub priority: ContactPriority,
    /// Availability, e.g. "24/7" or "8:00 AM - 5:00 PM"
    pub hours: String,
    /// Button label when the contact also appears in the emergency banner
    #[serde(default)]
    pub quick_dial: Option<String>,
}

impl HotlineContact {
    pub fn dial_uri(&self) -> String {
        dial_uri(&self.number)
    }

    pub fn sms_uri(&self) -> String {
        sms_uri(&self.number)
    }
}

impl Record for HotlineContact {
    const DOMAIN: Domain = Domain::Hotlines;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("fixtures.json")
    }
}

impl Searchable for HotlineContact {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.number.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
    }
}

impl Categorized for HotlineContact {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Keep only digits and `+`, the form `tel:` and `sms:` links expect
pub fn normalize_phone_number(number: &str) -> String {
    number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub fn dial_uri(number: &str) -> String {
    format!("tel:{}", normalize_phone_number(number))
}

pub fn sms_uri(number: &str) -> String {
    format!("sms:{}", normalize_phone_number(number))
}

/// Contacts shown as buttons in the emergency banner, in directory order
pub fn quick_dial_contacts(contacts: &[HotlineContact]) -> Vec<HotlineContact> {
    contacts
        .iter()
        .filter(|c| c.quick_dial.is_some())
        .cloned()
        .collect()
}

pub const WHEN_TO_CALL_EMERGENCY: [&str; 5] = [
    "Medical emergencies",
    "Fire incidents",
    "Crimes in progress",
    "Natural disasters",
    "Life-threatening situations",
];

pub const WHEN_TO_CALL_BARANGAY: [&str; 5] = [
    "Noise complaints",
    "Minor disputes",
    "Public service requests",
    "Community concerns",
    "Non-emergency issues",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::group_by_category;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    fn contacts() -> Vec<HotlineContact> {
        FixtureRepository.list_records().unwrap()
    }

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("(046) 234-5678"), "0462345678");
        assert_eq!(normalize_phone_number("(+63) 912-345-6789"), "+639123456789");
        assert_eq!(normalize_phone_number("911"), "911");
        assert_eq!(normalize_phone_number("call us!"), "");
    }

    #[test]
    fn test_uris() {
        assert_eq!(dial_uri("(02) 8911-1406"), "tel:0289111406");
        assert_eq!(sms_uri("117"), "sms:117");
    }

    #[test]
    fn test_directory_sections() {
        let groups = group_by_category(&contacts());
        let names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Emergency Services",
                "Law Enforcement",
                "Fire Protection",
                "Medical Emergency",
                "Local Government",
                "Barangay Officials"
            ]
        );
        assert_eq!(groups[5].1.len(), 4);
    }

    #[test]
    fn test_quick_dial_numbers() {
        let numbers: Vec<String> = quick_dial_contacts(&contacts())
            .into_iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(numbers, vec!["911", "117", "116"]);
    }

    #[test]
    fn test_priorities_are_recognized() {
        use crate::shared::catalog::Taxonomy;
        assert!(contacts().iter().all(|c| c.priority.is_recognized()));
    }
}
