use contracts::domain::a001_resident::Resident;
use contracts::domain::a002_service_request::ServiceRequest;
use contracts::domain::a003_facility::Facility;
use contracts::domain::a004_facility_booking::FacilityBooking;
use contracts::domain::a005_incident_report::{IncidentReport, ReportDraft, ReportType};
use contracts::domain::a006_hotline::{normalize_phone_number, HotlineContact};
use contracts::domain::common::Record;
use contracts::enums::{ReportStatus, RequestStatus};
use contracts::shared::catalog::{
    aggregate, classify, filter, DisplayVariant, IconKind, Searchable, Taxonomy,
};
use contracts::shared::config::{load_config, parse_config, DEFAULT_CONFIG};
use contracts::shared::repository::{ensure_unique_ids, FixtureRepository, RecordRepository};

fn load<R: Record>() -> Vec<R> {
    FixtureRepository.list_records().unwrap()
}

#[test]
fn test_empty_term_returns_everything_in_order() {
    let residents: Vec<Resident> = load();
    assert_eq!(filter(&residents, ""), residents);

    let contacts: Vec<HotlineContact> = load();
    assert_eq!(filter(&contacts, ""), contacts);
}

/// Terms taken from a field: the whole value, a prefix, a middle slice and
/// case-changed copies
fn terms_from(field: &str) -> Vec<String> {
    let chars: Vec<char> = field.chars().collect();
    let prefix: String = chars.iter().take(3).collect();
    let middle: String = chars.iter().skip(chars.len() / 2).take(4).collect();
    let swapped: String = chars
        .iter()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<String>()
            } else {
                c.to_uppercase().collect()
            }
        })
        .collect();
    vec![field.to_string(), prefix, middle, swapped, field.to_uppercase()]
}

fn check_filter_laws<R: Searchable + Clone + PartialEq + std::fmt::Debug>(records: &[R]) {
    for record in records {
        for field in record.searchable_fields() {
            for term in terms_from(field) {
                let needle = term.to_lowercase();
                let expected: Vec<R> = records
                    .iter()
                    .filter(|r| {
                        r.searchable_fields()
                            .iter()
                            .any(|f| f.to_lowercase().contains(&needle))
                    })
                    .cloned()
                    .collect();
                let found = filter(records, &term);
                assert_eq!(found, expected, "term {term:?}");
                assert_eq!(filter(&found, &term), found, "term {term:?}");
            }
            assert!(filter(records, field).contains(record), "field {field:?}");
        }
    }
    assert!(filter(records, "zzz-no-such-text").is_empty());
}

#[test]
fn test_filter_matches_exactly_and_is_idempotent() {
    check_filter_laws(&load::<ServiceRequest>());
    check_filter_laws(&load::<Resident>());
    check_filter_laws(&load::<IncidentReport>());
    check_filter_laws(&load::<HotlineContact>());
}

#[test]
fn test_searching_residents_for_pedro() {
    let residents: Vec<Resident> = load();
    assert_eq!(residents.len(), 3);

    let found = filter(&residents, "Pedro");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Pedro Reyes");
}

#[test]
fn test_classify_is_total() {
    let mut reports: Vec<IncidentReport> = load();
    let resolved = reports
        .iter()
        .find(|r| r.status == ReportStatus::Resolved)
        .unwrap();
    let badges = classify(resolved);
    assert_eq!(badges.status.variant, DisplayVariant::Default);
    assert_eq!(badges.status.icon, IconKind::CheckCircle);

    reports[0].status = ReportStatus::from_label("Escalated");
    let badges = classify(&reports[0]);
    assert_eq!(badges.status.variant, DisplayVariant::Secondary);
    assert_eq!(badges.status, ReportStatus::fallback());
    assert!(badges.priority.is_some());
}

#[test]
fn test_unknown_status_in_fixture_json_degrades() {
    let json = r#"{
        "id": 9,
        "service": "Barangay ID",
        "applicant": "Lito Ramos",
        "requested_on": "2025-02-11",
        "status": "On Hold",
        "purpose": "Identification",
        "tracking_number": "BI-2025-009"
    }"#;
    let request: ServiceRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.status, RequestStatus::Unrecognized("On Hold".into()));
    assert_eq!(classify(&request).status, RequestStatus::fallback());
    assert_eq!(classify(&request).priority, None);
}

#[test]
fn test_aggregate_counts_sum_to_len() {
    let requests: Vec<ServiceRequest> = load();
    let counts = aggregate(&requests);
    assert_eq!(counts.classified_total(), requests.len());
    assert_eq!(counts.get(&RequestStatus::Approved), 2);
    assert_eq!(counts.get(&RequestStatus::Rejected), 0);

    let bookings: Vec<FacilityBooking> = load();
    assert_eq!(aggregate(&bookings).total(), bookings.len());
}

#[test]
fn test_unavailable_facility_is_never_bookable() {
    let facilities: Vec<Facility> = load();
    for facility in facilities.iter().filter(|f| !f.available) {
        assert!(!facility.booking_action().enabled);
        assert_eq!(facility.booking_action().label, "Unavailable");
    }
    assert!(facilities.iter().any(|f| !f.available));
}

#[test]
fn test_fixture_ids_are_unique() {
    ensure_unique_ids(&load::<Resident>()).unwrap();
    ensure_unique_ids(&load::<HotlineContact>()).unwrap();
    ensure_unique_ids(&load::<IncidentReport>()).unwrap();
}

#[test]
fn test_report_draft_needs_every_required_field() {
    let mut draft = ReportDraft::default();
    assert!(!draft.is_submittable());
    draft.report_type = Some(ReportType::Accident);
    draft.title = "Tricycle collision".into();
    draft.location = "National Road".into();
    assert!(!draft.is_submittable());
    draft.description = "Two tricycles, no injuries".into();
    assert!(draft.is_submittable());
}

#[test]
fn test_phone_numbers_keep_digits_and_plus() {
    let contacts: Vec<HotlineContact> = load();
    for contact in &contacts {
        let normalized = normalize_phone_number(&contact.number);
        assert!(normalized.chars().all(|c| c.is_ascii_digit() || c == '+'));
        assert!(!normalized.is_empty());
    }
}

#[test]
fn test_embedded_site_config_parses() {
    let config = parse_config(DEFAULT_CONFIG).unwrap();
    assert_eq!(config.contact.email, "paldit01@gmail.com");
    assert_eq!(load_config(None).unwrap(), config);
}
