//! Landing page: hero, quick services, announcements, events and the
//! barangay profile from the site configuration.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::CardAnimated;
use crate::shared::data::{load_or_empty, LoadErrors};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_HOME};
use contracts::domain::a007_announcement::{by_date, latest_first, Announcement, CommunityEvent};
use leptos::prelude::*;
use leptos_router::components::A;

/// (title, description, icon, href, accent)
const QUICK_SERVICES: [(&str, &str, &str, &str, &str); 4] = [
    (
        "E-Clearances",
        "Request barangay clearance, certificates, and permits online",
        "file-text",
        "/services",
        "primary",
    ),
    (
        "Emergency Hotlines",
        "Quick access to emergency contacts and hotlines",
        "phone",
        "/hotlines",
        "destructive",
    ),
    (
        "Facility Booking",
        "Reserve barangay facilities for events and gatherings",
        "building",
        "/facilities",
        "success",
    ),
    (
        "Report Incident",
        "Report incidents, complaints, and issues in the community",
        "alert-triangle",
        "/reports",
        "warning",
    ),
];

/// 2450 -> "2,450"
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn Homepage() -> impl IntoView {
    let site = expect_context::<AppGlobalContext>().site();

    let (announcements, announcements_error) = load_or_empty::<Announcement>();
    let (events, events_error) = load_or_empty::<CommunityEvent>();
    log::debug!(
        "homepage mounted with {} announcements, {} events",
        announcements.len(),
        events.len()
    );
    let announcements = latest_first(&announcements);
    let events = by_date(&events);

    let about = site.about.clone();
    let profile_stats = [
        (format_count(about.population), "Total Residents"),
        (format_count(about.households), "Households"),
        (format_count(about.puroks), "Puroks"),
        (format!("{}", about.area_sq_km), "Area (km²)"),
    ];

    view! {
        <PageFrame page_id="a007_announcement--home" category=PAGE_CAT_HOME>
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">{format!("Welcome to Barangay {}", site.barangay.name)}</h1>
                    <p class="hero__subtitle">{site.barangay.motto.clone()}</p>
                    <div class="button-row">
                        <A href="/services" attr:class="button button--secondary button--lg">
                            {icon("file-text")}
                            "Apply for Services"
                        </A>
                        <A href="/hotlines" attr:class="button button--outline button--lg hero__ghost">
                            {icon("phone")}
                            "Emergency Contacts"
                        </A>
                    </div>
                </div>
            </section>

            <div class="page__content">
                <LoadErrors errors=vec![announcements_error, events_error] />

                <section class="home-section">
                    <h2 class="home-section__title">"Quick Services"</h2>
                    <div class="card-grid card-grid--four">
                        {QUICK_SERVICES
                            .iter()
                            .enumerate()
                            .map(|(i, &(title, description, icon_name, href, accent))| {
                                view! {
                                    <A href=href attr:class="quick-service">
                                        <CardAnimated delay_ms=stagger_delay(i) class="quick-service__card">
                                            <span class=format!("quick-service__icon quick-service__icon--{accent}")>
                                                {icon(icon_name)}
                                            </span>
                                            <h3 class="quick-service__title">{title}</h3>
                                            <p class="muted">{description}</p>
                                        </CardAnimated>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <div class="two-column">
                    <section>
                        <h2 class="section-title">{icon("alert-triangle")}"Recent Announcements"</h2>
                        <div class="stack">
                            {announcements
                                .into_iter()
                                .enumerate()
                                .map(|(i, announcement)| {
                                    view! {
                                        <CardAnimated delay_ms=stagger_delay(i) class="announcement-card">
                                            <div class="announcement-card__header">
                                                <h3>{announcement.title.clone()}</h3>
                                                <StatusBadge value=announcement.priority.clone() />
                                            </div>
                                            <p class="muted">
                                                {icon("calendar")}
                                                {format_date(announcement.posted_on)}
                                            </p>
                                            <p>{announcement.content.clone()}</p>
                                        </CardAnimated>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section>
                        <h2 class="section-title">{icon("calendar")}"Upcoming Events"</h2>
                        <div class="stack">
                            {events
                                .into_iter()
                                .enumerate()
                                .map(|(i, event)| {
                                    view! {
                                        <CardAnimated delay_ms=stagger_delay(i) class="event-card">
                                            <h3>{event.title.clone()}</h3>
                                            <ul class="detail-list">
                                                <li>{icon("calendar")}<span>{format_date(event.date)}</span></li>
                                                <li>{icon("clock")}<span>{event.time.clone()}</span></li>
                                                <li>{icon("map-pin")}<span>{event.location.clone()}</span></li>
                                            </ul>
                                        </CardAnimated>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                </div>

                <section class="home-section">
                    <h2 class="home-section__title">"About Our Barangay"</h2>
                    <CardAnimated class="about-card">
                        <div class="two-column">
                            <div>
                                <h3>"Our Mission"</h3>
                                <p class="muted">{about.mission.clone()}</p>
                                <h3>"Our Vision"</h3>
                                <p class="muted">{about.vision.clone()}</p>
                            </div>
                            <div>
                                <h3>"Statistics"</h3>
                                <div class="about-card__stats">
                                    {profile_stats
                                        .into_iter()
                                        .map(|(value, label)| {
                                            view! {
                                                <div class="about-card__stat">
                                                    <div class="about-card__value">{value}</div>
                                                    <div class="muted">{label}</div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </CardAnimated>
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(15), "15");
        assert_eq!(format_count(680), "680");
        assert_eq!(format_count(2450), "2,450");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_quick_services_point_at_routes() {
        use crate::routes::routes::NAV_ITEMS;
        for (_, _, _, href, _) in QUICK_SERVICES {
            assert!(NAV_ITEMS.iter().any(|(path, _, _)| *path == href));
        }
    }
}
