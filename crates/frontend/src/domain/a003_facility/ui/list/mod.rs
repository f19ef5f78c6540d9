pub mod state;

use self::state::{create_state, FacilitiesState, FacilitiesTab};
use crate::domain::a004_facility_booking::ui::calendar::CalendarTab;
use crate::domain::a004_facility_booking::ui::list::BookingsTab;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::data::{load_or_empty, LoadErrors};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a003_facility::{Equipment, Facility};
use contracts::domain::a004_facility_booking::{approval_rate, bookings_in_month, FacilityBooking};
use contracts::enums::BookingStatus;
use contracts::shared::catalog::{aggregate, DisplayVariant};
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    let state = create_state();

    let (facilities, facilities_error) = load_or_empty::<Facility>();
    let (equipment, equipment_error) = load_or_empty::<Equipment>();
    let (bookings, bookings_error) = load_or_empty::<FacilityBooking>();
    log::debug!(
        "facilities page mounted with {} facilities, {} equipment, {} bookings",
        facilities.len(),
        equipment.len(),
        bookings.len()
    );

    let total = facilities.len().to_string();
    let this_month = bookings_in_month(&bookings, today()).to_string();
    let pending = aggregate(&bookings).get(&BookingStatus::Pending).to_string();
    let rate = format!("{}%", approval_rate(&bookings));

    let facilities = StoredValue::new(facilities);
    let equipment = StoredValue::new(equipment);
    let bookings = StoredValue::new(bookings);

    let selected_tab = RwSignal::new(FacilitiesTab::Facilities.code().to_string());
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab.get();
        if prev.is_some() {
            log::debug!("facilities tab -> {current}");
            state.update(|s| {
                s.active_tab = FacilitiesTab::from_code(&current);
                s.notice = None;
            });
        }
        current
    });

    view! {
        <PageFrame page_id="a003_facility--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Facility Booking"
                subtitle="Reserve barangay facilities and equipment for community events and private functions"
                icon_name="building"
            />

            <div class="page__content">
                <LoadErrors errors=vec![facilities_error, equipment_error, bookings_error] />

                <div class="stat-grid">
                    <StatCard label="Total Facilities" icon_name="building" value=total />
                    <StatCard
                        label="This Month"
                        icon_name="calendar"
                        value=this_month
                        subtitle="bookings"
                    />
                    <StatCard
                        label="Pending"
                        icon_name="alert-circle"
                        value=pending
                        variant=DisplayVariant::Warning
                    />
                    <StatCard
                        label="Approval Rate"
                        icon_name="check-circle"
                        value=rate
                        variant=DisplayVariant::Secondary
                    />
                </div>

                <div class="page__toolbar">
                    <TabList selected_value=selected_tab>
                        {FacilitiesTab::all()
                            .into_iter()
                            .map(|tab| view! { <Tab value=tab.code()>{tab.label()}</Tab> })
                            .collect_view()}
                    </TabList>
                </div>

                {move || state.with(|s| s.notice.clone()).map(|message| view! {
                    <div class="notice notice--success">{icon("check-circle")}<span>{message}</span></div>
                })}

                {move || match state.with(|s| s.active_tab) {
                    FacilitiesTab::Facilities => {
                        view! {
                            <div class="section-intro">
                                <h2>"Available Facilities"</h2>
                                <p>"Browse and book barangay facilities for your events."</p>
                            </div>
                            <div class="card-grid">
                                {facilities
                                    .get_value()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, facility)| {
                                        view! { <FacilityCard facility=facility state=state index=i /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    FacilitiesTab::Equipment => {
                        view! {
                            <div class="section-intro">
                                <h2>"Equipment Inventory"</h2>
                                <p>"Check availability and rent equipment for your events."</p>
                            </div>
                            <div class="card-grid">
                                {equipment
                                    .get_value()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        view! { <EquipmentCard item=item state=state index=i /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    FacilitiesTab::Bookings => {
                        view! { <BookingsTab bookings=bookings.get_value() /> }.into_any()
                    }
                    FacilitiesTab::Calendar => {
                        view! {
                            <CalendarTab
                                selected_date=Signal::derive(move || state.with(|s| s.selected_date))
                                on_select=Callback::new(move |date| {
                                    state.update(|s| s.selected_date = date)
                                })
                                facilities=facilities.get_value()
                                bookings=bookings.get_value()
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn FacilityCard(facility: Facility, state: RwSignal<FacilitiesState>, index: usize) -> impl IntoView {
    let action = facility.booking_action();
    let name = facility.name.clone();
    let book = move |_| {
        // Booking requests are acknowledged, never stored
        log::info!("booking requested for {name}");
        state.update(|s| {
            s.notice = Some(format!(
                "Booking request for {name} sent. The barangay office will confirm your schedule."
            ))
        });
    };
    let availability = if facility.available {
        DisplayVariant::Default
    } else {
        DisplayVariant::Destructive
    };

    let facility_name = facility.name.clone();
    let description = facility.description.clone();
    let availability_label = facility.availability_label();
    let capacity = facility.capacity;
    let rate_label = facility.rate_label();
    let amenities = facility.amenities.clone();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="facility-card">
            <div class="facility-card__header">
                <div>
                    <h3 class="facility-card__name">{facility_name}</h3>
                    <p class="facility-card__description">{description}</p>
                </div>
                <Badge variant=availability>{availability_label}</Badge>
            </div>
            <div class="facility-card__facts">
                <span>{icon("users")}{format!("Capacity: {}", capacity)}</span>
                <span class="facility-card__rate">{rate_label}</span>
            </div>
            <div>
                <span class="muted">"Amenities:"</span>
                <div class="tag-list">
                    {amenities
                        .into_iter()
                        .map(|amenity| view! { <Badge variant=DisplayVariant::Outline>{amenity}</Badge> })
                        .collect_view()}
                </div>
            </div>
            <Button
                class="button--block"
                disabled=!action.enabled
                on_click=Callback::new(book)
            >
                {icon("calendar")}
                {action.label}
            </Button>
        </CardAnimated>
    }
}

#[component]
fn EquipmentCard(item: Equipment, state: RwSignal<FacilitiesState>, index: usize) -> impl IntoView {
    let action = item.request_action();
    let percent = item.availability_percent();
    let name = item.name.clone();
    let request = move |_| {
        log::info!("equipment requested: {name}");
        state.update(|s| {
            s.notice = Some(format!("Request for {name} sent. Pick-up details will follow."))
        });
    };

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="equipment-card">
            <h3 class="equipment-card__name">{item.name.clone()}</h3>
            <p class="muted">{format!("Rental Rate: {}", item.rate_label())}</p>
            <dl class="fact-list">
                <div>
                    <dt>"Available:"</dt>
                    <dd class="text-success">{item.available}</dd>
                </div>
                <div>
                    <dt>"Total:"</dt>
                    <dd>{item.total}</dd>
                </div>
            </dl>
            <div class="progress">
                <div class="progress__bar" style=format!("width: {percent}%;")></div>
            </div>
            <Button
                size="sm"
                class="button--block"
                disabled=!action.enabled
                on_click=Callback::new(request)
            >
                {action.label}
            </Button>
        </CardAnimated>
    }
}
