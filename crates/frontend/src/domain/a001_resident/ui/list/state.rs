use contracts::domain::a001_resident::RegistrationDraft;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResidentTab {
    #[default]
    List,
    Register,
    Statistics,
}

impl ResidentTab {
    pub fn all() -> [ResidentTab; 3] {
        [ResidentTab::List, ResidentTab::Register, ResidentTab::Statistics]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResidentTab::List => "list",
            ResidentTab::Register => "register",
            ResidentTab::Statistics => "statistics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResidentTab::List => "Resident List",
            ResidentTab::Register => "Register New",
            ResidentTab::Statistics => "Statistics",
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
pub struct ResidentsState {
    pub active_tab: ResidentTab,
    /// Committed search term (after debounce)
    pub search_term: String,
    pub draft: RegistrationDraft,
}

pub fn create_state() -> RwSignal<ResidentsState> {
    RwSignal::new(ResidentsState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_codes_round_trip() {
        for tab in ResidentTab::all() {
            assert_eq!(ResidentTab::from_code(tab.code()), tab);
        }
        assert_eq!(ResidentTab::from_code("bogus"), ResidentTab::List);
    }
}
