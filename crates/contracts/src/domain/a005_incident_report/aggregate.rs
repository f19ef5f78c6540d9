use crate::domain::common::{CatalogRecord, Categorized, Domain, Record, RecordId};
use crate::enums::{Priority, ReportStatus};
use crate::shared::catalog::{IconKind, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Report type
// ============================================================================

/// Kinds of report a resident can file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    Incident,
    StreetLight,
    Accident,
    Emergency,
}

impl ReportType {
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::Incident => "incident",
            ReportType::StreetLight => "streetlight",
            ReportType::Accident => "accident",
            ReportType::Emergency => "emergency",
        }
    }

    /// Card title on the submit tab
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Incident => "General Incident",
            ReportType::StreetLight => "Street Light Issue",
            ReportType::Accident => "Accident Report",
            ReportType::Emergency => "Emergency Response",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportType::Incident => "Report disputes, complaints, or general concerns",
            ReportType::StreetLight => "Report broken or malfunctioning street lights",
            ReportType::Accident => "Report vehicle accidents or injuries",
            ReportType::Emergency => "Track emergency response activities",
        }
    }

    pub fn icon(&self) -> IconKind {
        match self {
            ReportType::Incident => IconKind::AlertTriangle,
            ReportType::StreetLight => IconKind::Lightbulb,
            ReportType::Accident => IconKind::Car,
            ReportType::Emergency => IconKind::Shield,
        }
    }

    /// Category label stored on filed reports
    pub fn category_label(&self) -> &'static str {
        match self {
            ReportType::Incident => "Incident",
            ReportType::StreetLight => "Street Light",
            ReportType::Accident => "Accident",
            ReportType::Emergency => "Emergency",
        }
    }

    pub fn all() -> Vec<ReportType> {
        vec![
            ReportType::Incident,
            ReportType::StreetLight,
            ReportType::Accident,
            ReportType::Emergency,
        ]
    }
}

// ============================================================================
// Incident report
// ============================================================================

/// A filed report, shown on the tracking tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub id: RecordId,
    /// Category label such as "Street Light"
    pub category: String,
    pub title: String,
    pub reporter: String,
    pub location: String,
    pub reported_on: NaiveDate,
    pub status: ReportStatus,
    pub priority: Priority,
    pub description: String,
}

impl IncidentReport {
    pub fn report_type(&self) -> Option<ReportType> {
        ReportType::all()
            .into_iter()
            .find(|t| t.category_label() == self.category)
    }
}

/// Reports not yet resolved
pub fn open_report_count(reports: &[IncidentReport]) -> usize {
    reports.iter().filter(|r| r.status.is_open()).count()
}

impl Record for IncidentReport {
    const DOMAIN: Domain = Domain::IncidentReports;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fixture_json() -> &'static str {
        include_str!("fixtures.json")
    }
}

impl Searchable for IncidentReport {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.location.as_str(),
            self.reporter.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Categorized for IncidentReport {
    fn category(&self) -> &str {
        &self.category
    }
}

impl CatalogRecord for IncidentReport {
    type Status = ReportStatus;
    type Priority = Priority;

    fn status(&self) -> &ReportStatus {
        &self.status
    }

    fn priority(&self) -> Option<&Priority> {
        Some(&self.priority)
    }

    fn created_on(&self) -> NaiveDate {
        self.reported_on
    }
}

// ============================================================================
// Report form
// ============================================================================

/// Unsaved input of the "Submit Report" tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub report_type: Option<ReportType>,
    pub title: String,
    pub location: String,
    pub priority: Option<Priority>,
    pub description: String,
    pub contact_number: String,
}

impl ReportDraft {
    /// Required inputs still blank, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.report_type.is_none() {
            missing.push("report type");
        }
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::{FixtureRepository, RecordRepository};

    fn complete_draft() -> ReportDraft {
        ReportDraft {
            report_type: Some(ReportType::StreetLight),
            title: "Flickering lamp".into(),
            location: "Acacia St, Purok 4".into(),
            priority: None,
            description: "Lamp post #3 flickers all night".into(),
            contact_number: String::new(),
        }
    }

    #[test]
    fn test_report_types_resolve_from_category() {
        let reports: Vec<IncidentReport> = FixtureRepository.list_records().unwrap();
        let types: Vec<Option<ReportType>> = reports.iter().map(|r| r.report_type()).collect();
        assert_eq!(
            types,
            vec![
                Some(ReportType::StreetLight),
                Some(ReportType::Incident),
                Some(ReportType::Accident)
            ]
        );
    }

    #[test]
    fn test_open_reports_exclude_resolved() {
        let reports: Vec<IncidentReport> = FixtureRepository.list_records().unwrap();
        assert_eq!(open_report_count(&reports), 2);
        assert_eq!(open_report_count(&[]), 0);
    }

    #[test]
    fn test_unknown_category_has_no_report_type() {
        let mut report = FixtureRepository.list_records::<IncidentReport>().unwrap().remove(0);
        report.category = "Flooding".into();
        assert_eq!(report.report_type(), None);
    }

    #[test]
    fn test_complete_draft_is_submittable() {
        assert!(complete_draft().is_submittable());
    }

    #[test]
    fn test_each_required_field_blocks_submit() {
        let mut draft = complete_draft();
        draft.report_type = None;
        assert_eq!(draft.missing_fields(), vec!["report type"]);

        let mut draft = complete_draft();
        draft.title = "   ".into();
        assert_eq!(draft.missing_fields(), vec!["title"]);

        let mut draft = complete_draft();
        draft.location.clear();
        assert!(!draft.is_submittable());

        let mut draft = complete_draft();
        draft.description.clear();
        assert_eq!(draft.missing_fields(), vec!["description"]);
    }

    #[test]
    fn test_empty_draft_lists_all_missing() {
        assert_eq!(
            ReportDraft::default().missing_fields(),
            vec!["report type", "title", "location", "description"]
        );
    }
}
