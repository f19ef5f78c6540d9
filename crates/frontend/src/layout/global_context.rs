use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

/// App-wide UI state shared through context.
///
/// Page state never lives here; each page owns its own signals.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile navigation menu expanded
    pub nav_open: RwSignal<bool>,
    pub site: StoredValue<SiteConfig>,
}

impl AppGlobalContext {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            nav_open: RwSignal::new(false),
            site: StoredValue::new(site),
        }
    }

    pub fn toggle_nav(&self) {
        self.nav_open.update(|open| *open = !*open);
    }

    pub fn close_nav(&self) {
        self.nav_open.set(false);
    }

    pub fn site(&self) -> SiteConfig {
        self.site.get_value()
    }
}
