//! Label wrapper shared by the text controls.
//!
//! The control is nested inside the `<label>`, so no element ids are needed to
//! tie the caption to its input.

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    /// Adds the "*" marker after the caption
    #[prop(optional)]
    required: bool,
    /// Small print under the control
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="form__group">
            <span class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </span>
            {children()}
            {move || hint.get().map(|h| view! { <span class="form__note">{h}</span> })}
        </label>
    }
}
