use super::state::ReportsState;
use crate::shared::browser::scroll_to_top;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::CardAnimated;
use crate::shared::icons::{icon, icon_kind};
use contracts::domain::a005_incident_report::{ReportDraft, ReportType};
use contracts::enums::Priority;
use contracts::shared::catalog::Taxonomy;
use leptos::prelude::*;

/// Options of the priority select; the empty value means "not chosen"
pub fn priority_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select priority".to_string()))
        .chain(
            Priority::all()
                .into_iter()
                .rev()
                .map(|p| (p.form_value(), p.label().to_string())),
        )
        .collect()
}

/// Priority picked in the select, None for the placeholder
pub fn parse_priority(value: &str) -> Option<Priority> {
    if value.is_empty() {
        None
    } else {
        Some(Priority::from_label(value))
    }
}

fn bind(
    state: RwSignal<ReportsState>,
    get: fn(&ReportDraft) -> &String,
    set: fn(&mut ReportDraft, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || state.with(|s| get(&s.draft).clone())),
        Callback::new(move |value: String| state.update(|s| set(&mut s.draft, value))),
    )
}

/// Report type cards plus the details form
#[component]
pub fn SubmitReportForm(state: RwSignal<ReportsState>) -> impl IntoView {
    let (title, on_title) = bind(state, |d| &d.title, |d, v| d.title = v);
    let (location, on_location) = bind(state, |d| &d.location, |d, v| d.location = v);
    let (description, on_description) =
        bind(state, |d| &d.description, |d, v| d.description = v);
    let (contact, on_contact) = bind(state, |d| &d.contact_number, |d, v| d.contact_number = v);

    let priority = Signal::derive(move || {
        state.with(|s| s.draft.priority.as_ref().map(Priority::form_value).unwrap_or_default())
    });
    let selected_type = move || state.with(|s| s.draft.report_type);
    let missing = Memo::new(move |_| state.with(|s| s.draft.missing_fields()));

    let submit = move |_| {
        let draft = state.with_untracked(|s| s.draft.clone());
        if !draft.is_submittable() {
            return;
        }
        let kind = draft.report_type.map(|t| t.title()).unwrap_or_default();
        // Reports are not persisted; the submission is logged and the form reset
        log::info!(
            "{} report submitted: {} at {}",
            kind,
            draft.title.trim(),
            draft.location.trim()
        );
        state.update(|s| {
            s.confirmation = Some(format!(
                "Your {} report \"{}\" was submitted. Barangay officials will review it shortly.",
                kind.to_lowercase(),
                draft.title.trim()
            ));
            s.draft = ReportDraft::default();
        });
        scroll_to_top();
    };

    view! {
        <div>
            <h2 class="section-title">"Submit New Report"</h2>
            <p class="form__label">"Select Report Type"</p>
            <div class="card-grid card-grid--two">
                {ReportType::all()
                    .into_iter()
                    .map(|report_type| {
                        let is_selected = move || selected_type() == Some(report_type);
                        view! {
                            <button
                                class="type-card"
                                class:type-card--selected=is_selected
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.draft.report_type = Some(report_type);
                                        s.confirmation = None;
                                    })
                                }
                            >
                                <span class=format!("type-card__icon type-card__icon--{}", report_type.code())>
                                    {icon_kind(report_type.icon())}
                                </span>
                                <span class="type-card__title">{report_type.title()}</span>
                                <span class="type-card__description">{report_type.description()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || selected_type().is_some()>
                <CardAnimated class="form-card">
                    <h3 class="form-card__title">"Report Details"</h3>
                    <p class="form-card__subtitle">"Provide detailed information about the incident"</p>

                    <Input
                        label="Report Title"
                        required=true
                        placeholder="Brief description of the issue"
                        value=title
                        on_input=on_title
                    />
                    <Input
                        label="Location"
                        required=true
                        placeholder="Specific address or landmark"
                        value=location
                        on_input=on_location
                    />
                    <Select
                        label="Priority Level"
                        value=priority
                        options=priority_options()
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| s.draft.priority = parse_priority(&value))
                        })
                    />
                    <Textarea
                        label="Detailed Description"
                        required=true
                        placeholder="Provide detailed information about the incident..."
                        rows=4
                        value=description
                        on_input=on_description
                    />
                    <Input
                        label="Contact Number"
                        input_type="tel"
                        placeholder="Your contact number"
                        value=contact
                        on_input=on_contact
                        hint="Optional, used for follow-up calls"
                    />

                    <div class="upload-box">
                        {icon("camera")}
                        <p class="muted">"Photo attachments can be brought to the barangay hall"</p>
                    </div>

                    {move || {
                        let missing = missing.get();
                        (!missing.is_empty())
                            .then(|| view! {
                                <p class="form__hint">{format!("Required: {}", missing.join(", "))}</p>
                            })
                    }}

                    <Button
                        class="button--block"
                        disabled=Signal::derive(move || !missing.get().is_empty())
                        on_click=Callback::new(submit)
                    >
                        {icon("plus")}
                        "Submit Report"
                    </Button>
                </CardAnimated>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_options_start_with_placeholder() {
        let options = priority_options();
        assert_eq!(options[0].0, "");
        let values: Vec<&str> = options[1..].iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["low", "medium", "high"]);
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority(""), None);
        assert_eq!(parse_priority("high"), Some(Priority::High));
    }
}
