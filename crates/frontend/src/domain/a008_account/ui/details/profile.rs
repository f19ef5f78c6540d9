use super::state::AccountState;
use crate::shared::components::ui::{Button, Input, StatusBadge};
use crate::shared::components::CardAnimated;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a008_account::{ProfileDraft, UserProfile};
use leptos::prelude::*;

fn bind(
    state: RwSignal<AccountState>,
    get: fn(&ProfileDraft) -> &String,
    set: fn(&mut ProfileDraft, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || state.with(|s| get(&s.draft).clone())),
        Callback::new(move |value: String| state.update(|s| set(&mut s.draft, value))),
    )
}

#[component]
pub fn ProfileSection(profile: UserProfile, state: RwSignal<AccountState>) -> impl IntoView {
    let (name, on_name) = bind(state, |d| &d.name, |d, v| d.name = v);
    let (email, on_email) = bind(state, |d| &d.email, |d, v| d.email = v);
    let (phone, on_phone) = bind(state, |d| &d.phone, |d, v| d.phone = v);
    let (address, on_address) = bind(state, |d| &d.address, |d, v| d.address = v);

    let editing = move || state.with(|s| s.editing);
    let locked = Signal::derive(move || !editing());
    let stored = StoredValue::new(profile.clone());

    let toggle = move |_| {
        if state.with_untracked(|s| s.editing) {
            // Edits stay in view state only; nothing is written back
            let dirty = stored.with_value(|p| state.with_untracked(|s| s.draft.is_dirty(p)));
            log::info!("profile edit finished (changed: {dirty})");
            state.update(|s| s.editing = false);
        } else {
            state.update(|s| {
                s.editing = true;
                s.notice = None;
            });
        }
    };

    view! {
        <CardAnimated class="account-card">
            <div class="account-card__header">
                <div>
                    <h2 class="account-card__title">{icon("user")}"Profile Information"</h2>
                    <p class="muted">"Manage your personal information and contact details"</p>
                </div>
                <Button
                    variant=Signal::derive(move || {
                        if editing() { "primary".to_string() } else { "outline".to_string() }
                    })
                    on_click=Callback::new(toggle)
                >
                    {move || if editing() { "Save Changes" } else { "Edit Profile" }}
                </Button>
            </div>

            <div class="form-grid">
                <Input label="Full Name" value=name on_input=on_name disabled=locked />
                <Input
                    label="Email Address"
                    input_type="email"
                    value=email
                    on_input=on_email
                    disabled=locked
                />
                <Input label="Phone Number" value=phone on_input=on_phone disabled=locked />
                <Input
                    label="Account Type"
                    value=profile.account_type.clone()
                    disabled=true
                    hint="Set by the barangay office"
                />
            </div>
            <Input label="Address" value=address on_input=on_address disabled=locked />

            <div class="form-grid">
                <div>
                    <span class="form__label">"Registration Date"</span>
                    <p class="muted">{icon("calendar")}{format_date(profile.registered_on)}</p>
                </div>
                <div>
                    <span class="form__label">"Account Status"</span>
                    <div><StatusBadge value=profile.status.clone() /></div>
                </div>
            </div>
        </CardAnimated>
    }
}
