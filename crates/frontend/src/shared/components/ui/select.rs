use super::field::FormField;
use leptos::prelude::*;

/// Drop-down over fixed `(value, caption)` pairs.
///
/// An option with an empty value acts as the "nothing chosen" placeholder.
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let options = options
        .into_iter()
        .map(|(code, caption)| {
            let placeholder = code.is_empty();
            let selected = {
                let code = code.clone();
                move || value.get() == code
            };
            view! {
                <option value=code disabled=placeholder prop:selected=selected>
                    {caption}
                </option>
            }
        })
        .collect_view();

    view! {
        <FormField label=label required=required>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options}
            </select>
        </FormField>
    }
}
