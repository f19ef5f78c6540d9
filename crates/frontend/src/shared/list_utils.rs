//! Search box and match highlighting shared by the catalog pages
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Byte ranges of `text` matching `term`, ignoring case.
///
/// Empty when `term` is empty. Ranges never overlap. Lower-casing may change
/// byte lengths for some non-ASCII text; ranges that would not land on char
/// boundaries are dropped.
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let term_lower = term.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&term_lower) {
        let start = last_pos + pos;
        let end = start + term_lower.len();
        if text.is_char_boundary(start) && text.is_char_boundary(end) {
            ranges.push((start, end));
        }
        last_pos = end;
    }
    ranges
}

/// Highlight matches of `term` in `text` (case-insensitive)
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let ranges = match_ranges(text, term);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button.
///
/// Keystrokes update the box immediately; `on_change` fires once typing has
/// paused for `debounce_ms`. Clearing is applied at once.
#[component]
pub fn SearchInput(
    /// Current committed term
    #[prop(into)]
    value: Signal<String>,
    /// Receives the term after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Delay in milliseconds; 0 commits on every keystroke
    #[prop(optional)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Dropping the previous timeout cancels it
        pending.update_value(|slot| {
            slot.take();
        });

        if debounce_ms == 0 {
            on_change.run(new_value);
            return;
        }

        let timeout = Timeout::new(debounce_ms, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.update_value(|slot| {
            slot.take();
        });
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().is_empty()>
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Card shown instead of a list when a search finds nothing
#[component]
pub fn NoResults(#[prop(into)] term: Signal<String>) -> impl IntoView {
    view! {
        <div class="no-results">
            {crate::shared::icons::icon("search")}
            <p>{move || format!("No results for \"{}\"", term.get())}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Juan dela Cruz", "an"), vec![(2, 4)]);
        assert_eq!(match_ranges("Purok 1, purok 2", "PUROK"), vec![(0, 5), (9, 14)]);
        assert!(match_ranges("Juan", "").is_empty());
        assert!(match_ranges("Juan", "maria").is_empty());
    }

    #[test]
    fn test_match_ranges_do_not_overlap() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_non_ascii_text_is_safe() {
        assert_eq!(match_ranges("₱50.00 fee", "fee"), vec![(9, 12)]);
    }
}
