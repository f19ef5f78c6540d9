//! Fixture access for the pages.
//!
//! Every page loads its collections once when it mounts. A collection that
//! fails to parse is logged and surfaced through [`ErrorBanner`]; the rest of
//! the page keeps working.

use contracts::domain::a008_account::UserProfile;
use contracts::domain::common::Record;
use contracts::shared::repository::{FixtureRepository, RecordRepository};
use leptos::prelude::*;

/// Load one collection, logging failures
pub fn load_records<R: Record>() -> Result<Vec<R>, String> {
    FixtureRepository.list_records::<R>().map_err(|e| {
        log::error!("{e}");
        e.to_string()
    })
}

/// Load a collection, or an empty one plus the error message
pub fn load_or_empty<R: Record>() -> (Vec<R>, Option<String>) {
    match load_records::<R>() {
        Ok(records) => (records, None),
        Err(message) => (Vec::new(), Some(message)),
    }
}

pub fn load_profile() -> Result<UserProfile, String> {
    FixtureRepository.user_profile().map_err(|e| {
        log::error!("{e}");
        e.to_string()
    })
}

/// Inline error shown in place of a section whose data did not load
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error">
            {crate::shared::icons::icon("alert-circle")}
            <span>{message}</span>
        </div>
    }
}

/// Renders every load error collected by a page
#[component]
pub fn LoadErrors(errors: Vec<Option<String>>) -> impl IntoView {
    errors
        .into_iter()
        .flatten()
        .map(|message| view! { <ErrorBanner message=message /> })
        .collect_view()
}
