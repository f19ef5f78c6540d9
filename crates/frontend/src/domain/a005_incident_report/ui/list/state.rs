use contracts::domain::a005_incident_report::ReportDraft;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReportsTab {
    #[default]
    Report,
    Track,
    Emergency,
}

impl ReportsTab {
    pub fn all() -> [ReportsTab; 3] {
        [ReportsTab::Report, ReportsTab::Track, ReportsTab::Emergency]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReportsTab::Report => "report",
            ReportsTab::Track => "track",
            ReportsTab::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportsTab::Report => "Submit Report",
            ReportsTab::Track => "Track Reports",
            ReportsTab::Emergency => "Emergency Response",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|tab| tab.code() == code)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReportsState {
    pub active_tab: ReportsTab,
    /// Search over tracked reports
    pub search_term: String,
    pub draft: ReportDraft,
    /// Confirmation shown after a submission
    pub confirmation: Option<String>,
}

pub fn create_state() -> RwSignal<ReportsState> {
    RwSignal::new(ReportsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_codes_round_trip() {
        for tab in ReportsTab::all() {
            assert_eq!(ReportsTab::from_code(tab.code()), tab);
        }
        assert_eq!(ReportsTab::from_code("unknown"), ReportsTab::Report);
    }
}
