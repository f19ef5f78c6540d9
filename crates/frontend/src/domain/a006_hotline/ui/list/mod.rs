pub mod state;

use self::state::create_state;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser::open_external;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::data::{load_or_empty, LoadErrors};
use crate::shared::icons::{icon, icon_kind};
use crate::shared::list_utils::{highlight_matches, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a006_hotline::{
    quick_dial_contacts, HotlineContact, WHEN_TO_CALL_BARANGAY, WHEN_TO_CALL_EMERGENCY,
};
use contracts::shared::catalog::{filter, group_by_category};
use leptos::prelude::*;

#[component]
pub fn HotlinesPage() -> impl IntoView {
    let debounce_ms = expect_context::<AppGlobalContext>().site().search.debounce_ms;
    let state = create_state();

    let (contacts, load_error) = load_or_empty::<HotlineContact>();
    let quick_dial = quick_dial_contacts(&contacts);
    let contacts = StoredValue::new(contacts);

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        contacts.with_value(|all| filter(all, &term))
    });

    view! {
        <PageFrame page_id="a006_hotline--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Emergency Hotlines"
                subtitle="Quick access to emergency services and important contacts"
                icon_name="phone"
                urgent=true
            />

            <div class="page__content">
                <LoadErrors errors=vec![load_error] />

                <section class="quick-dial">
                    <div class="quick-dial__text">
                        {icon("alert-triangle")}
                        <div>
                            <h2 class="quick-dial__title">"In Case of Emergency"</h2>
                            <p>"For life-threatening emergencies, call 911 immediately"</p>
                        </div>
                    </div>
                    <div class="quick-dial__buttons">
                        {quick_dial
                            .into_iter()
                            .map(|contact| {
                                let uri = contact.dial_uri();
                                let label = contact.quick_dial.clone().unwrap_or_default();
                                view! {
                                    <Button
                                        variant="destructive"
                                        size="lg"
                                        on_click=Callback::new(move |_| open_external(&uri))
                                    >
                                        {icon("phone")}
                                        {label}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <div class="page__toolbar">
                    <SearchInput
                        value=search_term
                        on_change=Callback::new(move |term: String| {
                            state.update(|s| s.search_term = term)
                        })
                        placeholder="Search hotlines..."
                        debounce_ms=debounce_ms
                    />
                </div>

                {move || {
                    let term = search_term.get();
                    let groups = group_by_category(&filtered.get());
                    if groups.is_empty() {
                        return view! { <NoResults term=term /> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(category, members)| {
                            let term = term.clone();
                            view! {
                                <section class="catalog-section">
                                    <h2 class="catalog-section__title">{category}</h2>
                                    <div class="card-grid">
                                        {members
                                            .into_iter()
                                            .enumerate()
                                            .map(|(i, contact)| {
                                                view! { <HotlineCard contact=contact term=term.clone() index=i /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}

                <div class="reminder-grid">
                    <ReminderCard
                        title="When to Call Emergency Services"
                        items=&WHEN_TO_CALL_EMERGENCY
                    />
                    <ReminderCard
                        title="When to Contact Barangay Officials"
                        items=&WHEN_TO_CALL_BARANGAY
                    />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn HotlineCard(contact: HotlineContact, term: String, index: usize) -> impl IntoView {
    let dial = contact.dial_uri();
    let sms = contact.sms_uri();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="hotline-card">
            <div class="hotline-card__header">
                <span class="hotline-card__icon">{icon_kind(contact.icon)}</span>
                <div class="hotline-card__heading">
                    <h3 class="hotline-card__name">{highlight_matches(&contact.name, &term)}</h3>
                    <p class="hotline-card__description">
                        {highlight_matches(&contact.description, &term)}
                    </p>
                </div>
                <StatusBadge value=contact.priority.clone() />
            </div>
            <div class="hotline-card__number">{highlight_matches(&contact.number, &term)}</div>
            <div class="hotline-card__hours">
                {icon("clock")}
                <span>{contact.hours.clone()}</span>
            </div>
            <div class="hotline-card__actions">
                <Button on_click=Callback::new(move |_| open_external(&dial))>
                    {icon("phone")}
                    "Call"
                </Button>
                <Button variant="outline" on_click=Callback::new(move |_| open_external(&sms))>
                    {icon("message-square")}
                    "SMS"
                </Button>
            </div>
        </CardAnimated>
    }
}

#[component]
fn ReminderCard(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <CardAnimated class="reminder-card">
            <h3 class="reminder-card__title">{title}</h3>
            <ul class="reminder-card__list">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </CardAnimated>
    }
}
