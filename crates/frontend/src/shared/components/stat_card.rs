use crate::shared::icons::icon;
use contracts::shared::catalog::DisplayVariant;
use leptos::prelude::*;

/// Summary card at the top of a page: an icon, a count and a caption
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Displayed value, already formatted
    #[prop(into)]
    value: Signal<String>,
    /// Colour accent of the icon
    #[prop(optional)]
    variant: Option<DisplayVariant>,
    /// Optional caption below the value
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let status_class = match variant.unwrap_or(DisplayVariant::Default) {
        DisplayVariant::Default => "stat-card",
        DisplayVariant::Warning => "stat-card stat-card--warning",
        DisplayVariant::Secondary => "stat-card stat-card--secondary",
        DisplayVariant::Destructive => "stat-card stat-card--error",
        DisplayVariant::Outline => "stat-card stat-card--outline",
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
