//! Storefront header with navigation, site search and session buttons

use crate::actions;
use crate::hooks::use_site_search;
use crate::state::{APP_STATE, Page, use_current_page};
use champa_catalog::{SearchEntry, SearchTarget};
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    let current = use_current_page();
    let logged_in = APP_STATE.read().session.is_logged_in();
    let is_admin = APP_STATE.read().identity.is_some();

    rsx! {
        header {
            class: "site-header",

            div {
                class: "brand",
                onclick: move |_| APP_STATE.write().navigate(Page::Home),
                span { class: "brand-mark", "C" }
                span { class: "brand-name", "Champa" }
            }

            nav {
                class: "site-nav",
                for page in Page::STOREFRONT.iter().copied() {
                    button {
                        key: "{page.display_name()}",
                        class: if page == current { "nav-link active" } else { "nav-link" },
                        onclick: move |_| APP_STATE.write().navigate(page),
                        "{page.display_name()}"
                    }
                }
            }

            SiteSearch {}

            div {
                class: "session-buttons",
                if logged_in {
                    if is_admin {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| APP_STATE.write().navigate(Page::Dashboard),
                            "Admin"
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            spawn(actions::logout());
                        },
                        "ອອກຈາກລະບົບ"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| APP_STATE.write().navigate(Page::Login),
                        "ເຂົ້າສູ່ລະບົບ"
                    }
                }
            }
        }
    }
}

/// Search box with a results dropdown
#[component]
pub fn SiteSearch() -> Element {
    let mut query = use_signal(String::new);
    let results = use_site_search(query);
    let shown = !query.read().trim().is_empty();

    rsx! {
        div {
            class: "site-search",
            input {
                class: "input search-input",
                r#type: "search",
                placeholder: "ຄົ້ນຫາ...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }

            if shown {
                div {
                    class: "search-results",
                    if results.read().is_empty() {
                        div { class: "search-empty", "ບໍ່ພົບຜົນການຄົ້ນຫາ" }
                    }
                    for (i, entry) in results.read().iter().cloned().enumerate() {
                        div {
                            key: "{i}",
                            class: "search-result",
                            onclick: move |_| {
                                open_result(&entry);
                                query.set(String::new());
                            },
                            span { class: "search-title", "{entry.title}" }
                            span { class: "search-label", "{entry.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Follow a search result to its page, pre-filtering the catalog for products
fn open_result(entry: &SearchEntry) {
    let mut state = APP_STATE.write();
    match &entry.target {
        SearchTarget::Page(page) => state.navigate(Page::from_site(*page)),
        SearchTarget::Product { search } => {
            state.catalog_filter.apply_link(None, Some(search));
            state.navigate(Page::Products);
        }
    }
}
