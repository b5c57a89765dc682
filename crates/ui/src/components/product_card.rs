//! Catalog product card

use crate::state::APP_STATE;
use champa_catalog::CARD_DESC_LIMIT;
use champa_core::{Product, category_label, sport_type_label, truncate_chars};
use dioxus::prelude::*;

/// Resolve an image reference against the API base when it is server-relative
pub fn image_src(image: &str, base_url: &str) -> String {
    let served = ["/static/", "/uploads/", "uploads/"];
    if served.iter().any(|prefix| image.starts_with(prefix)) {
        format!("{}/{}", base_url.trim_end_matches('/'), image.trim_start_matches('/'))
    } else {
        image.to_string()
    }
}

/// One product tile; clicking it opens the detail dialog
#[component]
pub fn ProductCard(product: Product) -> Element {
    let base_url = APP_STATE.read().config.base_url.clone();
    let id = product.id;
    let desc = truncate_chars(&product.desc, CARD_DESC_LIMIT);
    let category = category_label(&product.effective_category());
    let sport = sport_type_label(product.kind.as_deref());
    let image = product.image.as_deref().map(|i| image_src(i, &base_url));

    rsx! {
        div {
            class: "product-card",
            onclick: move |_| APP_STATE.write().open_product(id),

            div {
                class: "product-image",
                if let Some(src) = image {
                    img { src: "{src}", alt: "{product.title}" }
                } else {
                    div { class: "product-image-placeholder", "👕" }
                }
                if let Some(badge) = &product.badge {
                    span {
                        class: if product.is_free() { "badge badge-free" } else { "badge" },
                        "{badge}"
                    }
                }
            }

            div {
                class: "product-body",
                div {
                    class: "product-meta",
                    span { class: "chip", "{category}" }
                    span { class: "chip chip-muted", "{sport}" }
                }
                h3 { class: "product-title", "{product.title}" }
                if !product.price.is_empty() {
                    p { class: "product-price", "{product.price}" }
                }
                p { class: "product-desc", "{desc}" }
            }
        }
    }
}
