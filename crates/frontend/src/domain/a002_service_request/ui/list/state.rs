use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ServicesTab {
    #[default]
    Apply,
    Track,
    Requirements,
}

impl ServicesTab {
    pub fn all() -> [ServicesTab; 3] {
        [ServicesTab::Apply, ServicesTab::Track, ServicesTab::Requirements]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServicesTab::Apply => "apply",
            ServicesTab::Track => "track",
            ServicesTab::Requirements => "requirements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServicesTab::Apply => "Apply for Services",
            ServicesTab::Track => "Track Requests",
            ServicesTab::Requirements => "Requirements",
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
pub struct ServicesState {
    pub active_tab: ServicesTab,
    /// Search over the tracked requests
    pub search_term: String,
    /// Acknowledgement of the last "Apply Now" / "Download" click
    pub notice: Option<String>,
}

pub fn create_state() -> RwSignal<ServicesState> {
    RwSignal::new(ServicesState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_codes_round_trip() {
        for tab in ServicesTab::all() {
            assert_eq!(ServicesTab::from_code(tab.code()), tab);
        }
        assert_eq!(ServicesTab::from_code(""), ServicesTab::Apply);
    }
}
