use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::NAV_ITEMS;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<AppGlobalContext>().site();

    let office_hours = site
        .office_hours
        .iter()
        .map(|slot| {
            view! {
                <li class="footer__hours-row">
                    <span>{slot.days.clone()}</span>
                    <span>{slot.hours.clone()}</span>
                </li>
            }
        })
        .collect_view();

    let links = NAV_ITEMS
        .iter()
        .skip(1)
        .map(|&(href, label, _)| {
            view! {
                <li>
                    <A href=href attr:class="footer__link">{label}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <section>
                    <h3 class="footer__heading">"Contact Us"</h3>
                    <p class="footer__row">{icon("map-pin")}<span>{site.contact.address.clone()}</span></p>
                    <p class="footer__row">{icon("phone")}<span>{site.contact.phone.clone()}</span></p>
                    <p class="footer__row">{icon("mail")}<span>{site.contact.email.clone()}</span></p>
                </section>

                <section>
                    <h3 class="footer__heading">"Office Hours"</h3>
                    <ul class="footer__hours">{office_hours}</ul>
                </section>

                <section>
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__links">{links}</ul>
                </section>

                <section>
                    <h3 class="footer__heading">"Emergency"</h3>
                    <p class="footer__emergency-number">{site.emergency.number.clone()}</p>
                    <p class="footer__muted">{site.emergency.availability.clone()}</p>
                </section>
            </div>
            <div class="footer__bottom">
                {format!(
                    "© {} {}. All rights reserved.",
                    site.barangay.copyright_year,
                    site.full_name(),
                )}
            </div>
        </footer>
    }
}
