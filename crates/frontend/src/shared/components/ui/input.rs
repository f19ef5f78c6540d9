use super::field::FormField;
use leptos::prelude::*;

/// Single-line text field bound to a draft value.
///
/// `value` is written as a DOM property, so resetting the draft clears the box.
#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    /// Omitted for read-only fields
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" when omitted; the forms also use "email", "tel" and "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: MaybeProp<String>,
) -> impl IntoView {
    let kind = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <FormField label=label required=required hint=hint>
            <input
                class="form__input"
                type=kind
                placeholder=move || placeholder.get()
                required=required
                readonly=on_input.is_none()
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </FormField>
    }
}
