use crate::domain::common::{CatalogRecord, Categorized, Domain, Record, RecordId};
use crate::enums::{Priority, RequestStatus};
use crate::shared::catalog::{IconKind, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Service offering
// ============================================================================

/// Processing fee of a service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pesos", rename_all = "lowercase")]
pub enum Fee {
    Free,
    Amount(f64),
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fee::Free => write!(f, "Free"),
            Fee::Amount(pesos) => write!(f, "₱{:.2}", pesos),
        }
    }
}

/// A certificate or permit residents can apply for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub fee: Fee,
    pub processing_time: String,
    pub requirements: Vec<String>,
    pub icon: IconKind,
}

impl Record for ServiceOffering {
    const DOMAIN: Domain = Domain::ServiceOfferings;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("offerings.json")
    }
}

impl Searchable for ServiceOffering {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Categorized for ServiceOffering {
    fn category(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Service request
// ============================================================================

/// A submitted application, shown on the "Track Requests" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: RecordId,
    pub service: String,
    pub applicant: String,
    pub requested_on: NaiveDate,
    pub status: RequestStatus,
    pub purpose: String,
    pub tracking_number: String,
}

impl ServiceRequest {
    pub fn is_downloadable(&self) -> bool {
        self.status.is_downloadable()
    }
}

impl Record for ServiceRequest {
    const DOMAIN: Domain = Domain::ServiceRequests;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("requests.json")
    }
}

impl Searchable for ServiceRequest {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.service.as_str(),
            self.applicant.as_str(),
            self.tracking_number.as_str(),
            self.purpose.as_str(),
        ]
    }
}

impl Categorized for ServiceRequest {
    fn category(&self) -> &str {
        &self.service
    }
}

impl CatalogRecord for ServiceRequest {
    type Status = RequestStatus;
    type Priority = Priority;

    fn status(&self) -> &RequestStatus {
        &self.status
    }

    fn created_on(&self) -> NaiveDate {
        self.requested_on
    }
}

// ============================================================================
// General requirements
// ============================================================================

pub const VALID_GOVERNMENT_IDS: [&str; 6] = [
    "Driver's License",
    "SSS ID",
    "UMID",
    "Postal ID",
    "Voter's ID",
    "Passport",
];

pub const PROOF_OF_RESIDENCY: [&str; 4] = [
    "Utility Bill (within 3 months)",
    "Lease Contract",
    "Barangay Certificate",
    "Other proof of address",
];

pub const PROCESSING_GUIDELINES: [&str; 5] = [
    "Applications are processed during office hours (8:00 AM - 5:00 PM)",
    "Incomplete requirements will delay processing",
    "All documents must be clear and legible",
    "Processing fees are non-refundable",
    "Rush processing available for additional fee",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    #[test]
    fn test_fee_display() {
        assert_eq!(Fee::Free.to_string(), "Free");
        assert_eq!(Fee::Amount(50.0).to_string(), "₱50.00");
        assert_eq!(Fee::Amount(200.0).to_string(), "₱200.00");
    }

    #[test]
    fn test_offerings_load_with_icons() {
        let offerings: Vec<ServiceOffering> = FixtureRepository.list_records().unwrap();
        assert_eq!(offerings.len(), 4);
        assert_eq!(offerings[2].fee, Fee::Free);
        assert_eq!(offerings[3].icon, IconKind::DollarSign);
    }

    #[test]
    fn test_only_approved_requests_download() {
        let requests: Vec<ServiceRequest> = FixtureRepository.list_records().unwrap();
        let numbers: Vec<&str> = requests
            .iter()
            .filter(|r| r.is_downloadable())
            .map(|r| r.tracking_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["BC-2024-001", "BP-2025-004"]);
    }
}
