use crate::domain::common::{CatalogRecord, Categorized, Domain, Record, RecordId};
use crate::enums::{Priority, ResidentStatus};
use crate::shared::catalog::{percentage, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Registered resident of the barangay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub address: String,
    pub contact: String,
    pub email: String,
    pub registered_on: NaiveDate,
    pub status: ResidentStatus,
    pub household_role: HouseholdRole,
    pub family_members: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseholdRole {
    Head,
    Member,
}

impl HouseholdRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            HouseholdRole::Head => "Head of Household",
            HouseholdRole::Member => "Household Member",
        }
    }
}

impl Resident {
    /// Trailing address component, e.g. "Purok 1"
    pub fn purok(&self) -> &str {
        self.address
            .rsplit(',')
            .next()
            .map(str::trim)
            .unwrap_or(self.address.as_str())
    }

    pub fn is_household_head(&self) -> bool {
        self.household_role == HouseholdRole::Head
    }
}

impl Record for Resident {
    const DOMAIN: Domain = Domain::Residents;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("fixtures.json")
    }
}

impl Searchable for Resident {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }
}

impl Categorized for Resident {
    fn category(&self) -> &str {
        self.purok()
    }
}

impl CatalogRecord for Resident {
    type Status = ResidentStatus;
    type Priority = Priority;

    fn status(&self) -> &ResidentStatus {
        &self.status
    }

    fn created_on(&self) -> NaiveDate {
        self.registered_on
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// One bar of a distribution chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionBucket {
    pub label: &'static str,
    pub count: usize,
    pub percent: u32,
}

const AGE_BUCKETS: [(&str, u32, u32); 4] = [
    ("0-18 years", 0, 18),
    ("19-35 years", 19, 35),
    ("36-60 years", 36, 60),
    ("60+ years", 61, u32::MAX),
];

const HOUSEHOLD_BUCKETS: [(&str, u32, u32); 4] = [
    ("1-2 members", 0, 2),
    ("3-4 members", 3, 4),
    ("5-6 members", 5, 6),
    ("7+ members", 7, u32::MAX),
];

fn distribution(
    values: impl Iterator<Item = u32> + Clone,
    buckets: &[(&'static str, u32, u32)],
) -> Vec<DistributionBucket> {
    let total = values.clone().count();
    buckets
        .iter()
        .map(|&(label, low, high)| {
            let count = values.clone().filter(|v| (low..=high).contains(v)).count();
            DistributionBucket {
                label,
                count,
                percent: percentage(count, total),
            }
        })
        .collect()
}

/// Residents per age bracket
pub fn age_distribution(residents: &[Resident]) -> Vec<DistributionBucket> {
    distribution(residents.iter().map(|r| r.age), &AGE_BUCKETS)
}

/// Households per size bracket, counted over household heads
pub fn household_distribution(residents: &[Resident]) -> Vec<DistributionBucket> {
    distribution(
        residents
            .iter()
            .filter(|r| r.is_household_head())
            .map(|r| r.family_members),
        &HOUSEHOLD_BUCKETS,
    )
}

pub fn household_count(residents: &[Resident]) -> usize {
    residents.iter().filter(|r| r.is_household_head()).count()
}

/// Sum of family members over household heads
pub fn family_members_total(residents: &[Resident]) -> u32 {
    residents
        .iter()
        .filter(|r| r.is_household_head())
        .map(|r| r.family_members)
        .sum()
}

// ============================================================================
// Registration form
// ============================================================================

/// Unsaved input of the "Register" tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub birth_date: String,
    pub address: String,
    pub contact: String,
    pub email: String,
    pub is_household_head: bool,
    pub family_members: String,
}

impl RegistrationDraft {
    pub fn is_submittable(&self) -> bool {
        [&self.first_name, &self.last_name, &self.birth_date, &self.address, &self.contact]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    fn residents() -> Vec<Resident> {
        FixtureRepository.list_records().unwrap()
    }

    #[test]
    fn test_purok_is_last_address_part() {
        let r = &residents()[1];
        assert_eq!(r.purok(), "Purok 2");
        assert_eq!(r.category(), "Purok 2");
    }

    #[test]
    fn test_age_distribution() {
        let buckets = age_distribution(&residents());
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        // ages 35, 28, 42
        assert_eq!(counts, vec![0, 2, 1, 0]);
        assert_eq!(buckets[1].percent, 67);
        assert_eq!(buckets[2].percent, 33);
    }

    #[test]
    fn test_household_figures() {
        let all = residents();
        assert_eq!(household_count(&all), 3);
        assert_eq!(family_members_total(&all), 12);
        let buckets = household_distribution(&all);
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[2].count, 1);
    }

    #[test]
    fn test_every_household_lands_in_a_bucket() {
        let mut all = residents();
        for r in all.iter_mut() {
            r.household_role = HouseholdRole::Head;
        }
        all[0].family_members = 0;
        let buckets = household_distribution(&all);
        let counted: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(counted, household_count(&all));
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].percent, 33);
    }

    #[test]
    fn test_distribution_of_nothing_is_zero() {
        assert!(age_distribution(&[]).iter().all(|b| b.count == 0 && b.percent == 0));
    }

    #[test]
    fn test_registration_requires_core_fields() {
        let mut draft = RegistrationDraft::default();
        assert!(!draft.is_submittable());
        draft.first_name = "Ana".into();
        draft.last_name = "Garcia".into();
        draft.birth_date = "1990-05-01".into();
        draft.address = "12 Acacia St, Purok 4".into();
        assert!(!draft.is_submittable());
        draft.contact = "09171234567".into();
        assert!(draft.is_submittable());
    }
}
