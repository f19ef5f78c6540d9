use crate::domain::common::{Categorized, Domain, Record, RecordId};
use crate::shared::catalog::{percentage, Searchable};
use serde::{Deserialize, Serialize};

/// Label and state of a card's primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAction {
    pub enabled: bool,
    pub label: &'static str,
}

// ============================================================================
// Facility
// ============================================================================

/// A bookable barangay venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    /// Pesos per hour
    pub hourly_rate: u32,
    pub available: bool,
    pub amenities: Vec<String>,
}

impl Facility {
    pub fn rate_label(&self) -> String {
        format!("₱{}/hour", self.hourly_rate)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }

    /// An unavailable facility can never be booked, whatever its capacity or rate
    pub fn booking_action(&self) -> CardAction {
        if self.available {
            CardAction {
                enabled: true,
                label: "Book Now",
            }
        } else {
            CardAction {
                enabled: false,
                label: "Unavailable",
            }
        }
    }
}

impl Record for Facility {
    const DOMAIN: Domain = Domain::Facilities;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("facilities.json")
    }
}

impl Searchable for Facility {
    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.amenities.iter().map(String::as_str));
        fields
    }
}

impl Categorized for Facility {
    fn category(&self) -> &str {
        self.availability_label()
    }
}

// ============================================================================
// Equipment
// ============================================================================

/// Rentable equipment with its stock on hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: RecordId,
    pub name: String,
    pub available: u32,
    pub total: u32,
    /// Pesos per `unit`
    pub rate: u32,
    pub unit: String,
}

impl Equipment {
    pub fn rate_label(&self) -> String {
        format!("₱{}/{}", self.rate, self.unit)
    }

    /// Share of stock on hand, clamped to 0..=100
    pub fn availability_percent(&self) -> u32 {
        percentage(self.available as usize, self.total as usize).min(100)
    }

    pub fn request_action(&self) -> CardAction {
        if self.available > 0 {
            CardAction {
                enabled: true,
                label: "Request Equipment",
            }
        } else {
            CardAction {
                enabled: false,
                label: "Out of Stock",
            }
        }
    }
}

impl Record for Equipment {
    const DOMAIN: Domain = Domain::Equipment;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("equipment.json")
    }
}

impl Searchable for Equipment {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    fn pavilion() -> Facility {
        let facilities: Vec<Facility> = FixtureRepository.list_records().unwrap();
        facilities
            .into_iter()
            .find(|f| f.name == "Multipurpose Pavilion")
            .unwrap()
    }

    #[test]
    fn test_unavailable_facility_cannot_be_booked() {
        let mut facility = pavilion();
        assert!(!facility.available);
        for (capacity, rate) in [(0, 0), (300, 300), (10_000, 1)] {
            facility.capacity = capacity;
            facility.hourly_rate = rate;
            let action = facility.booking_action();
            assert!(!action.enabled);
            assert_eq!(action.label, "Unavailable");
        }
    }

    #[test]
    fn test_available_facility_books() {
        let mut facility = pavilion();
        facility.available = true;
        assert_eq!(
            facility.booking_action(),
            CardAction {
                enabled: true,
                label: "Book Now"
            }
        );
        assert_eq!(facility.rate_label(), "₱300/hour");
    }

    #[test]
    fn test_equipment_availability() {
        let equipment: Vec<Equipment> = FixtureRepository.list_records().unwrap();
        let chairs = &equipment[0];
        assert_eq!(chairs.availability_percent(), 75);
        assert_eq!(chairs.rate_label(), "₱5/piece");
        assert!(chairs.request_action().enabled);
    }

    #[test]
    fn test_equipment_edge_cases() {
        let mut item = Equipment {
            id: RecordId(99),
            name: "Projector".into(),
            available: 0,
            total: 0,
            rate: 100,
            unit: "unit".into(),
        };
        assert_eq!(item.availability_percent(), 0);
        assert!(!item.request_action().enabled);

        item.available = 5;
        item.total = 2;
        assert_eq!(item.availability_percent(), 100);
    }
}
