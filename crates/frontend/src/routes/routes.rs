use crate::domain::a001_resident::ui::list::ResidentsPage;
use crate::domain::a002_service_request::ui::list::ServicesPage;
use crate::domain::a003_facility::ui::list::FacilitiesPage;
use crate::domain::a005_incident_report::ui::list::ReportsPage;
use crate::domain::a006_hotline::ui::list::HotlinesPage;
use crate::domain::a007_announcement::ui::home::Homepage;
use crate::domain::a008_account::ui::details::AccountPage;
use crate::layout::Shell;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Navigation entries: (path, label, icon)
pub const NAV_ITEMS: [(&str, &str, &str); 7] = [
    ("/", "Home", "home"),
    ("/hotlines", "Hotlines", "phone"),
    ("/residents", "Residents", "users"),
    ("/services", "E-Services", "file-text"),
    ("/facilities", "Facilities", "building"),
    ("/reports", "Reports", "alert-triangle"),
    ("/account", "Account", "user"),
];

/// Whether the nav link for `href` should be highlighted at `pathname`.
/// The home link only matches the root itself.
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Homepage />
                    <Route path=path!("/hotlines") view=HotlinesPage />
                    <Route path=path!("/residents") view=ResidentsPage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/facilities") view=FacilitiesPage />
                    <Route path=path!("/reports") view=ReportsPage />
                    <Route path=path!("/account") view=AccountPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_only_matches_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/residents", "/"));
    }

    #[test]
    fn test_section_links_match_nested_paths() {
        assert!(is_active("/reports", "/reports"));
        assert!(is_active("/reports/3", "/reports"));
        assert!(!is_active("/reportsx", "/reports"));
        assert!(!is_active("/", "/reports"));
    }

    #[test]
    fn test_every_nav_item_is_active_on_its_own_path() {
        for (href, _, _) in NAV_ITEMS {
            let matches: Vec<&str> = NAV_ITEMS
                .iter()
                .filter(|(other, _, _)| is_active(href, other))
                .map(|(other, _, _)| *other)
                .collect();
            assert_eq!(matches, vec![href]);
        }
    }
}
