use crate::shared::icons::icon_kind;
use contracts::domain::common::CatalogRecord;
use contracts::shared::catalog::{classify, BadgeSpec, DisplayVariant, Taxonomy};
use leptos::prelude::*;

/// Badge component with the portal's display variants
#[component]
pub fn Badge(
    /// Visual treatment, `Default` when omitted
    #[prop(optional)]
    variant: Option<DisplayVariant>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = variant.unwrap_or(DisplayVariant::Default).css_class();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class, additional_class())>
            {children()}
        </span>
    }
}

/// Badge for a status or priority label, with the icon its taxonomy assigns
#[component]
pub fn StatusBadge<T: Taxonomy + Send + Sync + 'static>(
    /// Label to classify
    value: T,
) -> impl IntoView {
    spec_badge(value.badge(), value.label().to_string())
}

/// Priority badge (when the record has one) followed by the status badge
#[component]
pub fn RecordBadges<R: CatalogRecord + Send + Sync + 'static>(record: R) -> impl IntoView {
    let badges = classify(&record);
    let status = record.status().label().to_string();
    let priority = record.priority().map(|p| p.label().to_string());

    view! {
        <span class="record-badges">
            {priority.zip(badges.priority).map(|(label, spec)| spec_badge(spec, label))}
            {spec_badge(badges.status, status)}
        </span>
    }
}

fn spec_badge(spec: BadgeSpec, label: String) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", spec.variant.css_class())>
            <span class="badge__icon">{icon_kind(spec.icon)}</span>
            {label}
        </span>
    }
}
