pub mod state;

use self::state::{create_state, ServicesState, ServicesTab};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::data::{load_or_empty, LoadErrors};
use crate::shared::date_utils::format_date;
use crate::shared::icons::{icon, icon_kind};
use crate::shared::list_utils::{highlight_matches, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a002_service_request::{
    ServiceOffering, ServiceRequest, PROCESSING_GUIDELINES, PROOF_OF_RESIDENCY,
    VALID_GOVERNMENT_IDS,
};
use contracts::enums::RequestStatus;
use contracts::shared::catalog::{aggregate, filter, DisplayVariant};
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let debounce_ms = expect_context::<AppGlobalContext>().site().search.debounce_ms;
    let state = create_state();

    let (offerings, offerings_error) = load_or_empty::<ServiceOffering>();
    let (requests, requests_error) = load_or_empty::<ServiceRequest>();
    log::debug!(
        "services page mounted with {} offerings, {} requests",
        offerings.len(),
        requests.len()
    );

    let counts = aggregate(&requests);
    let total = counts.total().to_string();
    let approved = counts.get(&RequestStatus::Approved).to_string();
    let processing = counts.get(&RequestStatus::Processing).to_string();
    let pending = counts.get(&RequestStatus::Pending).to_string();

    let offerings = StoredValue::new(offerings);
    let requests = StoredValue::new(requests);

    let selected_tab = RwSignal::new(ServicesTab::Apply.code().to_string());
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab.get();
        if prev.is_some() {
            log::debug!("services tab -> {current}");
            state.update(|s| {
                s.active_tab = ServicesTab::from_code(&current);
                s.notice = None;
            });
        }
        current
    });

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        requests.with_value(|all| filter(all, &term))
    });

    view! {
        <PageFrame page_id="a002_service_request--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="E-Services Portal"
                subtitle="Apply for barangay certificates and permits online. Track your requests and download approved documents."
                icon_name="file-text"
            />

            <div class="page__content">
                <LoadErrors errors=vec![offerings_error, requests_error] />

                <div class="stat-grid">
                    <StatCard label="Total Applications" icon_name="file-text" value=total />
                    <StatCard
                        label="Approved"
                        icon_name="check-circle"
                        value=approved
                        variant=DisplayVariant::Secondary
                    />
                    <StatCard
                        label="Processing"
                        icon_name="clock"
                        value=processing
                        variant=DisplayVariant::Warning
                    />
                    <StatCard
                        label="Pending"
                        icon_name="alert-circle"
                        value=pending
                        variant=DisplayVariant::Outline
                    />
                </div>

                <div class="page__toolbar">
                    <TabList selected_value=selected_tab>
                        {ServicesTab::all()
                            .into_iter()
                            .map(|tab| view! { <Tab value=tab.code()>{tab.label()}</Tab> })
                            .collect_view()}
                    </TabList>
                    <Show when=move || state.with(|s| s.active_tab == ServicesTab::Track)>
                        <SearchInput
                            value=search_term
                            on_change=Callback::new(move |term: String| {
                                state.update(|s| s.search_term = term)
                            })
                            placeholder="Search by tracking number, service or applicant..."
                            debounce_ms=debounce_ms
                        />
                    </Show>
                </div>

                {move || state.with(|s| s.notice.clone()).map(|message| view! {
                    <div class="notice notice--success">{icon("check-circle")}<span>{message}</span></div>
                })}

                {move || match state.with(|s| s.active_tab) {
                    ServicesTab::Apply => {
                        view! {
                            <div class="section-intro">
                                <h2>"Available Services"</h2>
                                <p>"Choose the service you need and complete the online application form."</p>
                            </div>
                            <div class="card-grid card-grid--two">
                                {offerings
                                    .get_value()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, offering)| {
                                        view! { <OfferingCard offering=offering state=state index=i /> }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    ServicesTab::Track => {
                        let term = search_term.get();
                        let rows = filtered.get();
                        view! {
                            <div class="section-intro">
                                <h2>"Track Your Requests"</h2>
                                <p>"Monitor the status of your service applications and download approved documents."</p>
                            </div>
                            {if rows.is_empty() {
                                view! { <NoResults term=term /> }.into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {rows
                                            .into_iter()
                                            .enumerate()
                                            .map(|(i, request)| {
                                                view! {
                                                    <RequestCard
                                                        request=request
                                                        term=term.clone()
                                                        state=state
                                                        index=i
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }}
                        }
                            .into_any()
                    }
                    ServicesTab::Requirements => view! { <RequirementsPanel /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn OfferingCard(offering: ServiceOffering, state: RwSignal<ServicesState>, index: usize) -> impl IntoView {
    let title = offering.title.clone();
    let apply = move |_| {
        // No application is stored; the click is acknowledged only
        log::info!("application started for {title}");
        state.update(|s| {
            s.notice = Some(format!(
                "Your application for {title} has been started. Bring the listed requirements to the barangay hall."
            ))
        });
    };

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="service-card">
            <div class="service-card__header">
                <span class="service-card__icon">{icon_kind(offering.icon)}</span>
                <div>
                    <h3 class="service-card__title">{offering.title.clone()}</h3>
                    <p class="service-card__description">{offering.description.clone()}</p>
                </div>
            </div>
            <div class="service-card__facts">
                <div>
                    <span class="muted">"Fee:"</span>
                    <div class="service-card__fee">{offering.fee.to_string()}</div>
                </div>
                <div>
                    <span class="muted">"Processing:"</span>
                    <div class="strong">{offering.processing_time.clone()}</div>
                </div>
            </div>
            <div>
                <span class="muted">"Requirements:"</span>
                <ul class="bullet-list">
                    {offering
                        .requirements
                        .iter()
                        .map(|req| view! { <li>{req.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
            <Button class="button--block" on_click=Callback::new(apply)>
                {icon("file-text")}
                "Apply Now"
            </Button>
        </CardAnimated>
    }
}

#[component]
fn RequestCard(
    request: ServiceRequest,
    term: String,
    state: RwSignal<ServicesState>,
    index: usize,
) -> impl IntoView {
    let downloadable = request.is_downloadable();
    let tracking = request.tracking_number.clone();
    let download = move |_| {
        log::info!("download requested for {tracking}");
        state.update(|s| {
            s.notice = Some(format!("Document {tracking} is ready for pickup at the barangay hall."))
        });
    };

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="request-card">
            <div class="request-card__header">
                <div>
                    <h3 class="request-card__title">{highlight_matches(&request.service, &term)}</h3>
                    <p class="request-card__applicant">
                        {icon("user")}
                        {highlight_matches(&request.applicant, &term)}
                    </p>
                </div>
                <StatusBadge value=request.status.clone() />
            </div>
            <dl class="fact-list">
                <div>
                    <dt>"Tracking No:"</dt>
                    <dd class="mono">{highlight_matches(&request.tracking_number, &term)}</dd>
                </div>
                <div>
                    <dt>"Date Requested:"</dt>
                    <dd>{format_date(request.requested_on)}</dd>
                </div>
                <div>
                    <dt>"Purpose:"</dt>
                    <dd>{request.purpose.clone()}</dd>
                </div>
            </dl>
            <Show when=move || downloadable>
                <Button size="sm" class="button--block" on_click=Callback::new(download.clone())>
                    {icon("download")}
                    "Download"
                </Button>
            </Show>
        </CardAnimated>
    }
}

#[component]
fn RequirementsPanel() -> impl IntoView {
    let list = |items: &'static [&'static str]| {
        items
            .iter()
            .map(|item| view! { <li>{*item}</li> })
            .collect_view()
    };

    view! {
        <CardAnimated class="requirements-card">
            <div class="form-card__header">
                {icon("file-text")}
                <div>
                    <h2 class="form-card__title">"General Requirements"</h2>
                    <p class="form-card__subtitle">"Basic requirements for all barangay services"</p>
                </div>
            </div>
            <div class="two-column">
                <div>
                    <h3>"Valid Government ID"</h3>
                    <ul class="bullet-list">{list(&VALID_GOVERNMENT_IDS)}</ul>
                </div>
                <div>
                    <h3>"Proof of Residency"</h3>
                    <ul class="bullet-list">{list(&PROOF_OF_RESIDENCY)}</ul>
                </div>
            </div>
            <div class="notice notice--info">
                <h3>"Processing Guidelines"</h3>
                <ul class="bullet-list">{list(&PROCESSING_GUIDELINES)}</ul>
            </div>
        </CardAnimated>
    }
}
