use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::CardAnimated;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a004_facility_booking::FacilityBooking;
use leptos::prelude::*;

/// "My Bookings" tab of the facilities page
#[component]
pub fn BookingsTab(bookings: Vec<FacilityBooking>) -> impl IntoView {
    view! {
        <div class="section-intro">
            <h2>"My Bookings"</h2>
            <p>"Track your facility booking requests and their status."</p>
        </div>
        <div class="card-grid">
            {bookings
                .into_iter()
                .enumerate()
                .map(|(i, booking)| view! { <BookingCard booking=booking index=i /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn BookingCard(booking: FacilityBooking, index: usize) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="booking-card">
            <div class="booking-card__header">
                <div>
                    <h3 class="booking-card__event">{booking.event.clone()}</h3>
                    <p class="booking-card__facility">{icon("building")}{booking.facility.clone()}</p>
                </div>
                <StatusBadge value=booking.status.clone() />
            </div>
            <dl class="fact-list">
                <div>
                    <dt>{icon("user")}"Applicant:"</dt>
                    <dd class="strong">{booking.applicant.clone()}</dd>
                </div>
                <div>
                    <dt>{icon("calendar")}"Date:"</dt>
                    <dd>{format_date(booking.date)}</dd>
                </div>
                <div>
                    <dt>{icon("clock")}"Time:"</dt>
                    <dd>{booking.time_slot.clone()}</dd>
                </div>
                <div>
                    <dt>"Purpose:"</dt>
                    <dd>{booking.purpose.clone()}</dd>
                </div>
            </dl>
        </CardAnimated>
    }
}
