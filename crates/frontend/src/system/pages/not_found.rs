use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Fallback for any path without a route
#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("no route for {}", pathname.get_untracked());

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="not-found">
                <span class="not-found__icon">{icon("alert-circle")}</span>
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__message">"Oops! Page not found"</p>
                <p class="muted">{move || pathname.get()}</p>
                <A href="/">
                    <Button variant="primary">{icon("home")}"Return to Home"</Button>
                </A>
            </div>
        </PageFrame>
    }
}
