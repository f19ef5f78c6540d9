pub mod register;
pub mod state;
pub mod statistics;

use self::register::RegisterTab;
use self::state::{create_state, ResidentTab};
use self::statistics::StatisticsTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::data::{load_or_empty, LoadErrors};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_resident::{household_count, Resident};
use contracts::enums::ResidentStatus;
use contracts::shared::catalog::{aggregate, count_by_category, filter, DisplayVariant};
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[component]
pub fn ResidentsPage() -> impl IntoView {
    let debounce_ms = expect_context::<AppGlobalContext>().site().search.debounce_ms;
    let state = create_state();

    let (residents, load_error) = load_or_empty::<Resident>();
    log::debug!("residents page mounted with {} records", residents.len());

    let counts = aggregate(&residents);
    let total = counts.total().to_string();
    let households = household_count(&residents).to_string();
    let active = counts.get(&ResidentStatus::Active).to_string();
    let puroks = count_by_category(&residents).len().to_string();
    let residents = StoredValue::new(residents);

    let selected_tab = RwSignal::new(ResidentTab::List.code().to_string());
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab.get();
        if prev.is_some() {
            log::debug!("residents tab -> {current}");
            state.update(|s| s.active_tab = ResidentTab::from_code(&current));
        }
        current
    });

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        residents.with_value(|all| filter(all, &term))
    });

    view! {
        <PageFrame page_id="a001_resident--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Resident Management"
                subtitle="Comprehensive resident database and household information management"
                icon_name="users"
            />

            <div class="page__content">
                <LoadErrors errors=vec![load_error] />

                <div class="stat-grid">
                    <StatCard label="Total Residents" icon_name="users" value=total />
                    <StatCard label="Households" icon_name="home" value=households />
                    <StatCard
                        label="Active"
                        icon_name="user-check"
                        value=active
                        variant=DisplayVariant::Secondary
                    />
                    <StatCard
                        label="Puroks"
                        icon_name="map-pin"
                        value=puroks
                        variant=DisplayVariant::Warning
                    />
                </div>

                <div class="page__toolbar">
                    <TabList selected_value=selected_tab>
                        {ResidentTab::all()
                            .into_iter()
                            .map(|tab| view! { <Tab value=tab.code()>{tab.label()}</Tab> })
                            .collect_view()}
                    </TabList>
                    <Show when=move || state.with(|s| s.active_tab == ResidentTab::List)>
                        <SearchInput
                            value=search_term
                            on_change=Callback::new(move |term: String| {
                                state.update(|s| s.search_term = term)
                            })
                            placeholder="Search residents..."
                            debounce_ms=debounce_ms
                        />
                    </Show>
                </div>

                {move || match state.with(|s| s.active_tab) {
                    ResidentTab::List => {
                        let term = search_term.get();
                        let rows = filtered.get();
                        if rows.is_empty() {
                            view! { <NoResults term=term /> }.into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {rows
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, resident)| {
                                            view! { <ResidentCard resident=resident term=term.clone() index=i /> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                    ResidentTab::Register => view! { <RegisterTab state=state /> }.into_any(),
                    ResidentTab::Statistics => {
                        view! { <StatisticsTab residents=residents.get_value() /> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn ResidentCard(resident: Resident, term: String, index: usize) -> impl IntoView {
    let role = resident.household_role;
    let is_head = resident.is_household_head();

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="resident-card">
            <div class="resident-card__header">
                <div>
                    <h3 class="resident-card__name">{highlight_matches(&resident.name, &term)}</h3>
                    <p class="resident-card__meta">
                        {format!("Age {} | Registered {}", resident.age, format_date(resident.registered_on))}
                    </p>
                </div>
                <div class="resident-card__badges">
                    <StatusBadge value=resident.status.clone() />
                    <Show when=move || is_head>
                        <Badge variant=DisplayVariant::Outline>{role.display_name()}</Badge>
                    </Show>
                </div>
            </div>
            <ul class="detail-list">
                <li>{icon("map-pin")}<span>{highlight_matches(&resident.address, &term)}</span></li>
                <li>{icon("phone")}<span>{resident.contact.clone()}</span></li>
                <li>{icon("mail")}<span>{resident.email.clone()}</span></li>
                <li>{icon("home")}<span>{format!("Family Members: {}", resident.family_members)}</span></li>
            </ul>
        </CardAnimated>
    }
}
