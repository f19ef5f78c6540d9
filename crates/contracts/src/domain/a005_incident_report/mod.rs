pub mod aggregate;

pub use aggregate::{open_report_count, IncidentReport, ReportDraft, ReportType};
