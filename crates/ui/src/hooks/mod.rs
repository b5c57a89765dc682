//! # Hooks
//!
//! Timers and loaders shared by several pages.

use crate::actions;
use crate::state::{APP_STATE, Page};
use champa_catalog::search::{DEBOUNCE, SearchEntry, search_index, site_search};
use dioxus::prelude::*;
use std::time::Duration;

/// Probe the session and load the page's data once per mount
pub fn use_admin_page(page: Page) {
    use_effect(move || {
        spawn(actions::open_admin_page(page));
    });
}

/// Advance the hero carousel every `hero_interval_ms`
pub fn use_hero_autoplay() {
    use_future(move || async move {
        let interval = APP_STATE.peek().config.hero_interval_ms.max(500);
        loop {
            tokio::time::sleep(Duration::from_millis(interval)).await;
            APP_STATE.write().hero.next();
        }
    });
}

/// Site search results for `query`, recomputed 150 ms after the last keystroke
pub fn use_site_search(query: Signal<String>) -> Signal<Vec<SearchEntry>> {
    let mut results = use_signal(Vec::new);
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let term = query.read().clone();
        let ticket = *generation.peek() + 1;
        generation.set(ticket);

        spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            if *generation.peek() != ticket {
                return;
            }
            let index = search_index(&APP_STATE.peek().catalog.all_products());
            results.set(site_search(&index, &term));
        });
    });

    results
}
