//! Calendar tab: pick a day, see which facilities are taken.

use crate::shared::components::CardAnimated;
use crate::shared::date_utils::{format_date, format_date_short, parse_input_date, to_input_value};
use chrono::NaiveDate;
use contracts::domain::a003_facility::Facility;
use contracts::domain::a004_facility_booking::{schedule_for, FacilityBooking};
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Distinct days that hold at least one booking, ascending
pub fn booked_dates(bookings: &[FacilityBooking]) -> Vec<NaiveDate> {
    bookings
        .iter()
        .filter(|b| b.status.occupies_slot())
        .map(|b| b.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[component]
pub fn CalendarTab(
    #[prop(into)] selected_date: Signal<NaiveDate>,
    on_select: Callback<NaiveDate>,
    facilities: Vec<Facility>,
    bookings: Vec<FacilityBooking>,
) -> impl IntoView {
    let shortcuts = booked_dates(&bookings);
    let data = StoredValue::new((facilities, bookings));

    let schedule = move || {
        let date = selected_date.get();
        data.with_value(|(facilities, bookings)| schedule_for(date, facilities, bookings))
    };

    view! {
        <div class="two-column">
            <CardAnimated class="calendar-card">
                <h3 class="calendar-card__title">"Select Date"</h3>
                <p class="muted">"Choose a date to check facility availability"</p>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || to_input_value(selected_date.get())
                    on:change=move |ev| {
                        // Cleared or partial input keeps the previous day
                        if let Some(date) = parse_input_date(&event_target_value(&ev)) {
                            on_select.run(date);
                        }
                    }
                />
                <Show when={
                    let has_shortcuts = !shortcuts.is_empty();
                    move || has_shortcuts
                }>
                    <p class="muted">"Days with bookings:"</p>
                </Show>
                <div class="tag-list">
                    {shortcuts
                        .iter()
                        .map(|&date| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || selected_date.get() == date
                                    on:click=move |_| on_select.run(date)
                                >
                                    {format_date_short(date)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </CardAnimated>

            <CardAnimated class="calendar-card">
                <h3 class="calendar-card__title">
                    {move || format!("Bookings for {}", format_date(selected_date.get()))}
                </h3>
                <p class="muted">"Scheduled events and availability"</p>
                <div class="schedule">
                    {move || {
                        schedule()
                            .into_iter()
                            .map(|entry| {
                                let slot = entry
                                    .booking
                                    .as_ref()
                                    .map(|b| b.time_slot.clone())
                                    .unwrap_or_else(|| "Whole day".to_string());
                                view! {
                                    <div
                                        class="schedule__row"
                                        class:schedule__row--free=entry.is_available()
                                    >
                                        <div class="strong">{slot}</div>
                                        <div class="muted">{entry.summary()}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </CardAnimated>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::repository::{FixtureRepository, RecordRepository};

    #[test]
    fn test_booked_dates_are_sorted_and_distinct() {
        let bookings: Vec<FacilityBooking> = FixtureRepository.list_records().unwrap();
        let dates = booked_dates(&bookings);
        assert!(!dates.is_empty());
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
