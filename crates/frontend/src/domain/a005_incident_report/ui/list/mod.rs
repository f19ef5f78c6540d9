pub mod state;
pub mod submit;

use self::state::{create_state, ReportsTab};
use self::submit::SubmitReportForm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::browser::open_external;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::{Badge, Button, RecordBadges};
use crate::shared::components::{CardAnimated, PageHeader, StatCard};
use crate::shared::data::{load_or_empty, LoadErrors};
use crate::shared::date_utils::format_date;
use crate::shared::icons::{icon, icon_kind};
use crate::shared::list_utils::{highlight_matches, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a005_incident_report::{open_report_count, IncidentReport};
use contracts::domain::a006_hotline::dial_uri;
use contracts::enums::ReportStatus;
use contracts::shared::catalog::{aggregate, filter, DisplayVariant};
use leptos::prelude::*;
use thaw::{Tab, TabList};

/// Reports listed beside the form
const RECENT_REPORTS: usize = 3;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let site = expect_context::<AppGlobalContext>().site();
    let debounce_ms = site.search.debounce_ms;
    let emergency_uri = dial_uri(&site.emergency.number);
    let state = create_state();

    let (reports, load_error) = load_or_empty::<IncidentReport>();
    log::debug!("reports page mounted with {} records", reports.len());

    let counts = aggregate(&reports);
    let total = counts.total().to_string();
    let resolved = counts.get(&ReportStatus::Resolved).to_string();
    let in_progress = counts.get(&ReportStatus::InProgress).to_string();
    let pending = counts.get(&ReportStatus::Pending).to_string();
    let open_summary = format!(
        "{} of {} reports still awaiting resolution.",
        open_report_count(&reports),
        counts.total()
    );
    let reports = StoredValue::new(reports);

    let selected_tab = RwSignal::new(ReportsTab::Report.code().to_string());
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab.get();
        if prev.is_some() {
            log::debug!("reports tab -> {current}");
            state.update(|s| s.active_tab = ReportsTab::from_code(&current));
        }
        current
    });

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let filtered = Memo::new(move |_| {
        let term = search_term.get();
        reports.with_value(|all| filter(all, &term))
    });

    view! {
        <PageFrame page_id="a005_incident_report--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Incident & Report System"
                subtitle="Report incidents, complaints, and community issues. Track response and resolution status."
                icon_name="alert-triangle"
            />

            <div class="page__content">
                <LoadErrors errors=vec![load_error] />

                <div class="stat-grid">
                    <StatCard label="Total Reports" icon_name="file-text" value=total />
                    <StatCard
                        label="Resolved"
                        icon_name="check-circle"
                        value=resolved
                        variant=DisplayVariant::Secondary
                    />
                    <StatCard
                        label="In Progress"
                        icon_name="clock"
                        value=in_progress
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
                        {ReportsTab::all()
                            .into_iter()
                            .map(|tab| view! { <Tab value=tab.code()>{tab.label()}</Tab> })
                            .collect_view()}
                    </TabList>
                    <Show when=move || state.with(|s| s.active_tab == ReportsTab::Track)>
                        <SearchInput
                            value=search_term
                            on_change=Callback::new(move |term: String| {
                                state.update(|s| s.search_term = term)
                            })
                            placeholder="Search reports..."
                            debounce_ms=debounce_ms
                        />
                    </Show>
                </div>

                {move || match state.with(|s| s.active_tab) {
                    ReportsTab::Report => {
                        let recent: Vec<IncidentReport> = reports
                            .with_value(|all| all.iter().take(RECENT_REPORTS).cloned().collect());
                        view! {
                            {move || state.with(|s| s.confirmation.clone()).map(|message| view! {
                                <div class="notice notice--success">
                                    {icon("check-circle")}
                                    <span>{message}</span>
                                </div>
                            })}
                            <div class="two-column">
                                <SubmitReportForm state=state />
                                <div>
                                    <h2 class="section-title">"Recent Reports"</h2>
                                    <div class="stack">
                                        {recent
                                            .into_iter()
                                            .enumerate()
                                            .map(|(i, report)| {
                                                view! { <ReportCard report=report term=String::new() index=i /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    ReportsTab::Track => {
                        let term = search_term.get();
                        let rows = filtered.get();
                        view! {
                            <div class="section-intro">
                                <h2>"Track Your Reports"</h2>
                                <p>"Monitor the status and progress of your submitted reports."</p>
                                <p class="muted">{open_summary.clone()}</p>
                            </div>
                            {if rows.is_empty() {
                                view! { <NoResults term=term /> }.into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {rows
                                            .into_iter()
                                            .enumerate()
                                            .map(|(i, report)| {
                                                view! { <ReportCard report=report term=term.clone() index=i /> }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }}
                        }
                            .into_any()
                    }
                    ReportsTab::Emergency => {
                        let uri = emergency_uri.clone();
                        view! {
                            <CardAnimated class="emergency-card">
                                <div class="form-card__header form-card__header--urgent">
                                    {icon("shield")}
                                    <div>
                                        <h2 class="form-card__title">"Emergency Response Tracking"</h2>
                                        <p class="form-card__subtitle">
                                            "Track emergency response activities and assigned personnel"
                                        </p>
                                    </div>
                                </div>
                                <div class="empty-state">
                                    {icon("shield")}
                                    <h3>"Emergency Response Center"</h3>
                                    <p class="muted">"Emergency response tracking and coordination system"</p>
                                    <div class="button-row">
                                        <Button
                                            variant="destructive"
                                            on_click=Callback::new(move |_| open_external(&uri))
                                        >
                                            {icon("phone")}
                                            "Report Emergency"
                                        </Button>
                                        <Button
                                            variant="outline"
                                            on_click=Callback::new(move |_| {
                                                selected_tab.set(ReportsTab::Track.code().to_string())
                                            })
                                        >
                                            {icon("file-text")}
                                            "View Response Log"
                                        </Button>
                                    </div>
                                </div>
                            </CardAnimated>
                        }
                            .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn ReportCard(report: IncidentReport, term: String, index: usize) -> impl IntoView {
    let type_icon = report.report_type().map(|t| icon_kind(t.icon()));
    let category = report.category.clone();
    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="report-card">
            <div class="report-card__header">
                <div>
                    <div class="report-card__badges">
                        {type_icon}
                        <Badge variant=DisplayVariant::Outline>{category}</Badge>
                    </div>
                    <h3 class="report-card__title">{highlight_matches(&report.title, &term)}</h3>
                    <p class="report-card__reporter">
                        {icon("user")}
                        {highlight_matches(&report.reporter, &term)}
                    </p>
                </div>
                <RecordBadges record=report.clone() />
            </div>
            <ul class="detail-list">
                <li>{icon("map-pin")}<span>{highlight_matches(&report.location, &term)}</span></li>
                <li>{icon("clock")}<span>{format_date(report.reported_on)}</span></li>
            </ul>
            <p class="muted">{highlight_matches(&report.description, &term)}</p>
        </CardAnimated>
    }
}
