//! TopHeader component - portal navigation bar.
//!
//! Brand on the left, one link per page, and a menu toggle that collapses
//! the links on narrow screens.

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::{is_active, NAV_ITEMS};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let pathname = use_location().pathname;
    let brand = ctx.site().barangay.name;

    let toggle_nav = move |_| ctx.toggle_nav();

    view! {
        <header class="top-header">
            <div class="top-header__inner">
                <A href="/" attr:class="top-header__brand" on:click=move |_| ctx.close_nav()>
                    <span class="top-header__logo">{icon("shield")}</span>
                    <span class="top-header__title">{brand}</span>
                </A>

                <button
                    class="top-header__icon-btn top-header__menu-toggle"
                    on:click=toggle_nav
                    title=move || if ctx.nav_open.get() { "Close menu" } else { "Open menu" }
                >
                    {move || if ctx.nav_open.get() { icon("x") } else { icon("menu") }}
                </button>

                <nav
                    class="top-header__nav"
                    class:top-header__nav--open=move || ctx.nav_open.get()
                >
                    {NAV_ITEMS
                        .iter()
                        .map(|&(href, label, icon_name)| {
                            let active = move || is_active(&pathname.get(), href);
                            view! {
                                <A
                                    href=href
                                    attr:class=move || {
                                        if active() {
                                            "top-header__link top-header__link--active"
                                        } else {
                                            "top-header__link"
                                        }
                                    }
                                    on:click=move |_| ctx.close_nav()
                                >
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
