//! Full product card opened from the catalog

use dioxus::prelude::*;

use super::DialogHeader;
use crate::components::product_card::image_src;
use crate::state::APP_STATE;
use champa_core::{ProductId, category_label, sport_type_label};

#[component]
pub fn ProductDetailDialog(id: ProductId) -> Element {
    let (product, base_url) = {
        let state = APP_STATE.read();
        (state.catalog.find(id), state.config.base_url.clone())
    };

    let Some(product) = product else {
        return rsx! {
            div {
                class: "dialog-body",
                DialogHeader { title: "ບໍ່ພົບສິນຄ້າ".to_string() }
            }
        };
    };

    let category = category_label(&product.effective_category());
    let sport = sport_type_label(product.kind.as_deref());
    let collar = product.collar().to_string();

    rsx! {
        div {
            class: "dialog-body product-detail",

            DialogHeader { title: product.title.clone() }

            if let Some(image) = product.image.as_deref() {
                img { class: "detail-image", src: "{image_src(image, &base_url)}", alt: "{product.title}" }
            }

            dl {
                class: "detail-list",
                dt { "ໝວດໝູ່" }
                dd { "{category}" }
                dt { "ປະເພດ" }
                dd { "{sport}" }
                if !collar.is_empty() {
                    dt { "ຄໍເສື້ອ" }
                    dd { "{collar}" }
                }
                if !product.price.is_empty() {
                    dt { "ລາຄາ" }
                    dd { "{product.price}" }
                }
                if let Some(badge) = &product.badge {
                    dt { "ປ້າຍ" }
                    dd { "{badge}" }
                }
            }

            p { class: "detail-desc", "{product.desc}" }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let mut state = APP_STATE.write();
                        state.ui.close_dialog();
                        state.navigate(crate::state::Page::Contact);
                    },
                    "ສັ່ງຊື້ / ຕິດຕໍ່"
                }
            }
        }
    }
}
