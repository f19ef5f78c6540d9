use crate::shared::date_utils::today;
use chrono::NaiveDate;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FacilitiesTab {
    #[default]
    Facilities,
    Equipment,
    Bookings,
    Calendar,
}

impl FacilitiesTab {
    pub fn all() -> [FacilitiesTab; 4] {
        [
            FacilitiesTab::Facilities,
            FacilitiesTab::Equipment,
            FacilitiesTab::Bookings,
            FacilitiesTab::Calendar,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            FacilitiesTab::Facilities => "facilities",
            FacilitiesTab::Equipment => "equipment",
            FacilitiesTab::Bookings => "bookings",
            FacilitiesTab::Calendar => "calendar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacilitiesTab::Facilities => "Facilities",
            FacilitiesTab::Equipment => "Equipment",
            FacilitiesTab::Bookings => "My Bookings",
            FacilitiesTab::Calendar => "Calendar",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|tab| tab.code() == code)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct FacilitiesState {
    pub active_tab: FacilitiesTab,
    /// Day shown on the calendar tab
    pub selected_date: NaiveDate,
    /// Acknowledgement of the last booking or equipment request
    pub notice: Option<String>,
}

impl Default for FacilitiesState {
    fn default() -> Self {
        Self {
            active_tab: FacilitiesTab::default(),
            selected_date: today(),
            notice: None,
        }
    }
}

pub fn create_state() -> RwSignal<FacilitiesState> {
    RwSignal::new(FacilitiesState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_codes_round_trip() {
        for tab in FacilitiesTab::all() {
            assert_eq!(FacilitiesTab::from_code(tab.code()), tab);
        }
        assert_eq!(FacilitiesTab::from_code("Calendar"), FacilitiesTab::Facilities);
    }
}
