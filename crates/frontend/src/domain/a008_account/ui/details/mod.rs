pub mod profile;
pub mod settings;
pub mod state;

use self::profile::ProfileSection;
use self::settings::{unavailable, SecuritySection, SettingsSection};
use self::state::{create_state, AccountSection};
use crate::shared::components::ui::{Badge, Button, StatusBadge};
use crate::shared::components::CardAnimated;
use crate::shared::data::{load_or_empty, load_profile, ErrorBanner, LoadErrors};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a008_account::{
    unread_count, AccountActivity, Notification, ProfileDraft, UserProfile,
};
use contracts::shared::catalog::DisplayVariant;
use leptos::prelude::*;

#[component]
pub fn AccountPage() -> impl IntoView {
    match load_profile() {
        Ok(profile) => view! { <AccountDetails profile=profile /> }.into_any(),
        Err(message) => view! {
            <PageFrame page_id="a008_account--detail" category=PAGE_CAT_DETAIL>
                <div class="page__content">
                    <ErrorBanner message=message />
                </div>
            </PageFrame>
        }
        .into_any(),
    }
}

#[component]
fn AccountDetails(profile: UserProfile) -> impl IntoView {
    let state = create_state(ProfileDraft::from(&profile));

    let (activity, activity_error) = load_or_empty::<AccountActivity>();
    let (notifications, notifications_error) = load_or_empty::<Notification>();
    let unread = unread_count(&notifications);
    log::debug!("account page mounted for {} ({unread} unread)", profile.name);

    let activity = StoredValue::new(activity);
    let notifications = StoredValue::new(notifications);
    let stored_profile = StoredValue::new(profile.clone());

    view! {
        <PageFrame page_id="a008_account--detail" category=PAGE_CAT_DETAIL>
            <section class="account-hero">
                <span class="account-hero__avatar">{icon("user")}</span>
                <div>
                    // Hero keeps the saved name; edits live in the draft only
                    <h1 class="account-hero__name">{profile.name.clone()}</h1>
                    <p class="account-hero__type">{format!("{} Account", profile.account_type)}</p>
                    <StatusBadge value=profile.status.clone() />
                </div>
            </section>

            <div class="page__content">
                <LoadErrors errors=vec![activity_error, notifications_error] />

                <div class="account-layout">
                    <CardAnimated class="account-nav">
                        <nav class="account-nav__links">
                            {AccountSection::all()
                                .into_iter()
                                .map(|section| {
                                    let active = move || state.with(|s| s.section == section);
                                    view! {
                                        <Button
                                            variant=Signal::derive(move || {
                                                if active() { "primary".to_string() } else { "ghost".to_string() }
                                            })
                                            class="account-nav__link"
                                            on_click=Callback::new(move |_| {
                                                log::debug!("account section -> {}", section.label());
                                                state.update(|s| {
                                                    s.section = section;
                                                    s.notice = None;
                                                });
                                            })
                                        >
                                            {icon(section.icon())}
                                            {section.label()}
                                            {(section == AccountSection::Notifications && unread > 0)
                                                .then(|| view! {
                                                    <Badge variant=DisplayVariant::Destructive>{unread}</Badge>
                                                })}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </nav>
                        <div class="account-nav__footer">
                            <Button
                                variant="outline"
                                class="account-nav__link text-destructive"
                                on_click=Callback::new(move |_| unavailable(state, "Signing out"))
                            >
                                {icon("log-out")}
                                "Sign Out"
                            </Button>
                        </div>
                    </CardAnimated>

                    <div class="account-main">
                        {move || state.with(|s| s.notice.clone()).map(|message| view! {
                            <div class="notice notice--info">{icon("alert-circle")}<span>{message}</span></div>
                        })}

                        {move || match state.with(|s| s.section) {
                            AccountSection::Profile => {
                                view! { <ProfileSection profile=stored_profile.get_value() state=state /> }
                                    .into_any()
                            }
                            AccountSection::Activity => {
                                view! { <ActivitySection activity=activity.get_value() /> }.into_any()
                            }
                            AccountSection::Notifications => {
                                view! {
                                    <NotificationsSection notifications=notifications.get_value() />
                                }
                                    .into_any()
                            }
                            AccountSection::Security => {
                                view! { <SecuritySection state=state /> }.into_any()
                            }
                            AccountSection::Settings => {
                                view! { <SettingsSection state=state /> }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn ActivitySection(activity: Vec<AccountActivity>) -> impl IntoView {
    view! {
        <CardAnimated class="account-card">
            <h2 class="account-card__title">{icon("file-text")}"Recent Activity"</h2>
            <p class="muted">"Your recent transactions and interactions"</p>
            <div class="stack">
                {activity
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="activity-row">
                                <div>
                                    <div class="strong">{item.description.clone()}</div>
                                    <div class="muted">{icon("calendar")}{format_date(item.date)}</div>
                                </div>
                                <div class="activity-row__badges">
                                    <Badge variant=DisplayVariant::Outline>{item.kind.clone()}</Badge>
                                    <StatusBadge value=item.status.clone() />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}

#[component]
fn NotificationsSection(notifications: Vec<Notification>) -> impl IntoView {
    view! {
        <CardAnimated class="account-card">
            <h2 class="account-card__title">{icon("bell")}"Notifications"</h2>
            <p class="muted">"Stay updated with important announcements and updates"</p>
            <div class="stack">
                {notifications
                    .into_iter()
                    .map(|n| {
                        let unread = n.is_unread();
                        view! {
                            <div class="notification-row" class:notification-row--unread=unread>
                                <div class="strong">
                                    {n.title.clone()}
                                    {unread.then(|| view! {
                                        <Badge variant=DisplayVariant::Destructive class="badge--small">"New"</Badge>
                                    })}
                                </div>
                                <p class="muted">{n.message.clone()}</p>
                                <div class="muted">{icon("calendar")}{format_date(n.date)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}
