use super::field::FormField;
use leptos::prelude::*;

/// Multi-line counterpart of [`super::Input`]
#[component]
pub fn Textarea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
    /// Visible lines, 3 when omitted
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <FormField label=label required=required>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                placeholder=move || placeholder.get()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </FormField>
    }
}
