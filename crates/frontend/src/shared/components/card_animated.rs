//! CardAnimated - a Thaw card that fades in when mounted.
//!
//! The `card-appear` keyframes live in `styles/portal.css`.
//!
//! # Example
//! ```ignore
//! // Staggered grid
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=60>  // card 2
//! <CardAnimated delay_ms=120> // card 3
//!
//! // Extra classes for a highlighted card
//! <CardAnimated class="card--urgent">
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Step between consecutive cards of a grid
pub const STAGGER_MS: u32 = 60;

/// Delay for the card at `index`, capped so long lists do not lag
pub fn stagger_delay(index: usize) -> u32 {
    (index.min(8) as u32) * STAGGER_MS
}

/// Wrapper around Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles, appended after the animation
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };
    let full_class = if class.is_empty() {
        "portal-card".to_string()
    } else {
        format!("portal-card {class}")
    };

    view! {
        <Card class=full_class attr:style=full_style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 120);
        assert_eq!(stagger_delay(50), stagger_delay(8));
    }
}
