use leptos::prelude::*;

/// CSS classes for a variant/size pair. Unknown names fall back to the
/// primary variant and the default size.
pub fn button_class(variant: Option<&str>, size: Option<&str>) -> String {
    let variant = match variant {
        Some(v @ ("secondary" | "outline" | "ghost" | "destructive")) => v,
        _ => "primary",
    };
    match size {
        Some(s @ ("sm" | "lg")) => format!("button button--{variant} button--{s}"),
        _ => format!("button button--{variant}"),
    }
}

/// Action button.
///
/// Variants: "primary" (default), "secondary", "outline", "ghost", "destructive".
/// Sizes: "sm", "lg"; anything else is the regular size.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    /// Appended after the variant classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Hover text
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let base = button_class(variant.get().as_deref(), size.get().as_deref());
        match class.get() {
            Some(extra) => format!("{base} {extra}"),
            None => base,
        }
    };

    view! {
        <button
            type="button"
            class=classes
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(None, None), "button button--primary");
        assert_eq!(
            button_class(Some("destructive"), Some("lg")),
            "button button--destructive button--lg"
        );
        assert_eq!(button_class(Some("outline"), Some("md")), "button button--outline");
        assert_eq!(button_class(Some("fancy"), Some("sm")), "button button--primary button--sm");
    }
}
