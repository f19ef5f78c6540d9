//! Thin wrappers over `web_sys::window()` for the few places pages leave the SPA.

/// Hand a `tel:`, `sms:` or `mailto:` link to the browser
pub fn open_external(uri: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to open {uri}");
        return;
    };
    log::info!("opening {uri}");
    if let Err(e) = window.location().set_href(uri) {
        log::error!("failed to open {uri}: {e:?}");
    }
}

/// Scroll back to the top, used when a form is submitted
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
