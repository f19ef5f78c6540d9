use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - hero banner at the top of every page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Optional icon name shown beside the title
    #[prop(optional, into)]
    icon_name: Option<String>,

    /// Emergency pages use the red banner
    #[prop(optional)]
    urgent: bool,

    /// Actions on the right of the banner
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header" class:page-header--urgent=urgent>
            <div class="page-header__content">
                {icon_name.map(|name| view! {
                    <div class="page-header__icon">{icon(&name)}</div>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
