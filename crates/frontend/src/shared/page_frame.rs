//! PageFrame - root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  - `"{entity}--{category}"`, e.g. `"a006_hotline--list"`
//!   - `data-page-category`  - one of the PAGE_CAT_* constants
//!
//! The entity half of the id is the `domain/` directory the page lives in.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a006_hotline--list" category=PAGE_CAT_LIST>
//!         <PageHeader title="Emergency Hotlines" />
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Searchable catalog of records with tabs
pub const PAGE_CAT_LIST: &str = "list";

/// Single record (the signed-in resident's account)
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Landing page
pub const PAGE_CAT_HOME: &str = "home";

/// Not-found and other framework pages
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_HOME,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_HOME => "page page--home",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !ALL_CATEGORIES.contains(&category) {
        log::warn!("page {page_id:?} has non-standard metadata (category {category:?})");
    }

    let base_class = base_class(category);
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_resident--list"));
        assert!(is_valid_page_id("not_found--system"));
        assert!(!is_valid_page_id("residents"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_resident--"));
    }

    #[test]
    fn test_base_class_per_category() {
        assert_eq!(base_class(PAGE_CAT_LIST), "page");
        assert_eq!(base_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(base_class("unknown"), "page");
    }
}
