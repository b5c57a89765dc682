//! Reviews Page Component

use dioxus::prelude::*;

use super::home::ReviewItem;
use crate::state::APP_STATE;

#[component]
pub fn ReviewsPage() -> Element {
    let reviews = APP_STATE.read().all_reviews.clone();

    rsx! {
        div {
            class: "page reviews-page",
            h1 { class: "page-title", "ສິນຄ້າລີວິວ" }

            if reviews.is_empty() {
                div { class: "empty-state", "ຍັງບໍ່ມີລີວິວ" }
            } else {
                div {
                    class: "review-list review-list-full",
                    for (i, review) in reviews.into_iter().enumerate() {
                        ReviewItem { key: "{i}", review }
                    }
                }
            }
        }
    }
}
