use leptos::prelude::*;

/// Labelled toggle, optionally with a line of explanation under the caption
#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">
                {label}
                {move || description.get().map(|d| view! { <span class="form__note">{d}</span> })}
            </span>
        </label>
    }
}
