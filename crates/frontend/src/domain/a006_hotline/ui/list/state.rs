use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct HotlinesState {
    /// Committed search term (after debounce)
    pub search_term: String,
}

pub fn create_state() -> RwSignal<HotlinesState> {
    RwSignal::new(HotlinesState::default())
}
