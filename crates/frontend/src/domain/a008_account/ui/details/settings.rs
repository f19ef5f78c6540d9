use super::state::AccountState;
use crate::shared::components::ui::{Button, Checkbox, Select};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a008_account::{AccountPreferences, ProfileVisibility};
use leptos::prelude::*;

fn toggle(
    state: RwSignal<AccountState>,
    get: fn(&AccountPreferences) -> bool,
    set: fn(&mut AccountPreferences, bool),
) -> (Signal<bool>, Callback<bool>) {
    (
        Signal::derive(move || state.with(|s| get(&s.preferences))),
        Callback::new(move |checked: bool| {
            state.update(|s| set(&mut s.preferences, checked));
            log::debug!("preferences updated: {:?}", state.with_untracked(|s| s.preferences));
        }),
    )
}

fn visibility_options() -> Vec<(String, String)> {
    [ProfileVisibility::Public, ProfileVisibility::Private]
        .into_iter()
        .map(|v| (v.code().to_string(), v.display_name().to_string()))
        .collect()
}

/// Security rows: (title, description, action)
const SECURITY_ACTIONS: [(&str, &str, &str); 3] = [
    ("Password", "Last changed 30 days ago", "Change Password"),
    (
        "Two-Factor Authentication",
        "Add an extra layer of security to your account",
        "Enable 2FA",
    ),
    ("Login History", "View recent login activity", "View History"),
];

/// Explain an action the portal cannot perform
pub fn unavailable(state: RwSignal<AccountState>, action: &str) {
    log::info!("account action requested: {action}");
    state.update(|s| {
        s.notice = Some(format!(
            "{action} is handled at the barangay hall. Please visit during office hours."
        ))
    });
}

#[component]
pub fn SecuritySection(state: RwSignal<AccountState>) -> impl IntoView {
    view! {
        <CardAnimated class="account-card">
            <h2 class="account-card__title">{icon("shield")}"Security Settings"</h2>
            <p class="muted">"Manage your account security and privacy"</p>
            <div class="stack">
                {SECURITY_ACTIONS
                    .iter()
                    .map(|&(title, description, action)| {
                        view! {
                            <div class="setting-row">
                                <div>
                                    <h3>{title}</h3>
                                    <p class="muted">{description}</p>
                                </div>
                                <Button
                                    variant="outline"
                                    on_click=Callback::new(move |_| unavailable(state, action))
                                >
                                    {(title == "Password").then(|| icon("key"))}
                                    {action}
                                </Button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}

#[component]
pub fn SettingsSection(state: RwSignal<AccountState>) -> impl IntoView {
    let (email, on_email) = toggle(state, |p| p.email_notifications, |p, v| p.email_notifications = v);
    let (sms, on_sms) = toggle(state, |p| p.sms_notifications, |p, v| p.sms_notifications = v);
    let (updates, on_updates) =
        toggle(state, |p| p.application_updates, |p, v| p.application_updates = v);
    let (share, on_share) =
        toggle(state, |p| p.share_contact_info, |p, v| p.share_contact_info = v);
    let visibility = Signal::derive(move || {
        state.with(|s| s.preferences.visibility.code().to_string())
    });

    view! {
        <CardAnimated class="account-card">
            <h2 class="account-card__title">{icon("settings")}"Account Settings"</h2>
            <p class="muted">"Customize your account preferences"</p>

            <div class="setting-group">
                <h3>"Notification Preferences"</h3>
                <Checkbox
                    label="Email notifications"
                    description="Receive updates via email"
                    checked=email
                    on_change=on_email
                />
                <Checkbox
                    label="SMS notifications"
                    description="Receive updates via text message"
                    checked=sms
                    on_change=on_sms
                />
                <Checkbox
                    label="Application updates"
                    description="Status changes on your service requests"
                    checked=updates
                    on_change=on_updates
                />
            </div>

            <div class="setting-group">
                <h3>"Privacy Settings"</h3>
                <Select
                    label="Profile visibility"
                    value=visibility
                    options=visibility_options()
                    on_change=Callback::new(move |code: String| {
                        if let Some(v) = ProfileVisibility::from_code(&code) {
                            state.update(|s| s.preferences.visibility = v);
                        }
                    })
                />
                <Checkbox
                    label="Contact information sharing"
                    description="Allow barangay officials to share your contact details"
                    checked=share
                    on_change=on_share
                />
            </div>

            <div class="setting-group setting-group--danger">
                <h3>"Danger Zone"</h3>
                <p class="muted">"Permanently delete your account and all associated data"</p>
                <Button
                    variant="destructive"
                    size="sm"
                    on_click=Callback::new(move |_| unavailable(state, "Account deletion"))
                >
                    "Delete Account"
                </Button>
            </div>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_options_cover_every_code() {
        let options = visibility_options();
        assert_eq!(options.len(), 2);
        for (code, _) in options {
            assert!(ProfileVisibility::from_code(&code).is_some());
        }
    }
}
