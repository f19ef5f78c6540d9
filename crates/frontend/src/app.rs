use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::load_config;
use leptos::prelude::*;

/// Deployment overrides for the embedded default configuration
const SITE_TOML: &str = include_str!("../site.toml");

#[component]
pub fn App() -> impl IntoView {
    match load_config(Some(SITE_TOML)) {
        Ok(site) => {
            // Provide the AppGlobalContext store to the whole app via context.
            provide_context(AppGlobalContext::new(site));
            view! { <AppRoutes /> }.into_any()
        }
        Err(e) => {
            log::error!("Failed to load site configuration: {}", e);
            view! {
                <div class="error">{format!("Site configuration error: {}", e)}</div>
            }
            .into_any()
        }
    }
}
