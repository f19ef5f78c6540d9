use super::state::ResidentsState;
use crate::shared::browser::scroll_to_top;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a001_resident::RegistrationDraft;
use leptos::prelude::*;

/// Two-way binding between one text field of the draft and an input
fn bind(
    state: RwSignal<ResidentsState>,
    get: fn(&RegistrationDraft) -> &String,
    set: fn(&mut RegistrationDraft, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || state.with(|s| get(&s.draft).clone())),
        Callback::new(move |value: String| state.update(|s| set(&mut s.draft, value))),
    )
}

#[component]
pub fn RegisterTab(state: RwSignal<ResidentsState>) -> impl IntoView {
    let confirmation = RwSignal::new(None::<String>);

    let (first_name, on_first_name) = bind(state, |d| &d.first_name, |d, v| d.first_name = v);
    let (last_name, on_last_name) = bind(state, |d| &d.last_name, |d, v| d.last_name = v);
    let (middle_name, on_middle_name) = bind(state, |d| &d.middle_name, |d, v| d.middle_name = v);
    let (birth_date, on_birth_date) = bind(state, |d| &d.birth_date, |d, v| d.birth_date = v);
    let (address, on_address) = bind(state, |d| &d.address, |d, v| d.address = v);
    let (contact, on_contact) = bind(state, |d| &d.contact, |d, v| d.contact = v);
    let (email, on_email) = bind(state, |d| &d.email, |d, v| d.email = v);
    let (family_members, on_family_members) =
        bind(state, |d| &d.family_members, |d, v| d.family_members = v);

    let is_head = Signal::derive(move || state.with(|s| s.draft.is_household_head));
    let can_submit = Signal::derive(move || state.with(|s| s.draft.is_submittable()));

    let submit = move |_| {
        let draft = state.with_untracked(|s| s.draft.clone());
        if !draft.is_submittable() {
            return;
        }
        // Nothing is stored; the form only acknowledges the request
        log::info!(
            "registration submitted for {} {} ({})",
            draft.first_name.trim(),
            draft.last_name.trim(),
            draft.address.trim()
        );
        confirmation.set(Some(format!(
            "Registration for {} {} was received and is pending verification.",
            draft.first_name.trim(),
            draft.last_name.trim()
        )));
        state.update(|s| s.draft = RegistrationDraft::default());
        scroll_to_top();
    };

    view! {
        <CardAnimated class="form-card">
            <div class="form-card__header">
                {icon("user-check")}
                <div>
                    <h2 class="form-card__title">"Register New Resident"</h2>
                    <p class="form-card__subtitle">"Add a new resident to the barangay database"</p>
                </div>
            </div>

            {move || confirmation.get().map(|message| view! {
                <div class="notice notice--success">{icon("check-circle")}<span>{message}</span></div>
            })}

            <div class="form-grid">
                <Input label="First Name" required=true value=first_name on_input=on_first_name />
                <Input label="Last Name" required=true value=last_name on_input=on_last_name />
                <Input label="Middle Name" value=middle_name on_input=on_middle_name />
                <Input
                    label="Birth Date"
                    required=true
                    input_type="date"
                    value=birth_date
                    on_input=on_birth_date
                />
                <Input
                    label="Address"
                    required=true
                    placeholder="House No., Street, Purok"
                    value=address
                    on_input=on_address
                />
                <Input
                    label="Contact Number"
                    required=true
                    input_type="tel"
                    placeholder="+63 9XX XXX XXXX"
                    value=contact
                    on_input=on_contact
                />
                <Input label="Email" input_type="email" value=email on_input=on_email />
                <Input
                    label="Family Members"
                    input_type="number"
                    value=family_members
                    on_input=on_family_members
                />
            </div>

            <Checkbox
                label="Household head"
                checked=is_head
                on_change=Callback::new(move |checked: bool| {
                    state.update(|s| s.draft.is_household_head = checked)
                })
            />

            <div class="form-card__actions">
                <Button
                    variant="outline"
                    on_click=Callback::new(move |_| {
                        state.update(|s| s.draft = RegistrationDraft::default())
                    })
                >
                    "Clear"
                </Button>
                <Button
                    disabled=Signal::derive(move || !can_submit.get())
                    on_click=Callback::new(submit)
                >
                    {icon("plus")}
                    "Submit Registration"
                </Button>
            </div>
        </CardAnimated>
    }
}
