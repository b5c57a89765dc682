//! Catalog Page Component
//!
//! Category tabs, a search box and a collar selector over the merged
//! product source. The first few products show at once; the rest sit
//! behind a reveal button.

use dioxus::prelude::*;

use crate::components::{ProductCard, RevealMore, Select, SelectOption};
use crate::state::{APP_STATE, Dialog};
use champa_catalog::{ALL, derive_view};
use champa_core::{COLLAR_TYPES, Category, category_label};

/// Category tabs: "all" first, then every category in tab order
pub fn category_tabs() -> Vec<(String, String)> {
    std::iter::once((ALL.to_string(), "ທັງໝົດ".to_string()))
        .chain(
            Category::all()
                .iter()
                .map(|c| (c.as_str().to_string(), category_label(c.as_str()))),
        )
        .collect()
}

fn collar_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "ທຸກແບບຄໍ")];
    options.extend(SelectOption::plain(COLLAR_TYPES));
    options
}

#[component]
pub fn CatalogPage() -> Element {
    let state = APP_STATE.read();
    let filter = state.catalog_filter.clone();
    let products = state.catalog.all_products();
    drop(state);

    let view = derive_view(&products, &filter);
    let hidden = view.hidden();
    let matched = view.matched;
    let items = view.cloned_items();

    rsx! {
        div {
            class: "page catalog-page",

            div {
                class: "page-head",
                h1 { class: "page-title", "ສິນຄ້າ" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::AddLocalProduct),
                    "+ ເພີ່ມສິນຄ້າ"
                }
            }

            div {
                class: "tabs",
                for (value, label) in category_tabs() {
                    button {
                        key: "{value}",
                        class: if filter.category == value { "tab active" } else { "tab" },
                        onclick: move |_| APP_STATE.write().catalog_filter.set_category(value.clone()),
                        "{label}"
                    }
                }
            }

            div {
                class: "toolbar-row",
                input {
                    class: "input search-input",
                    r#type: "search",
                    placeholder: "ຄົ້ນຫາສິນຄ້າ...",
                    value: "{filter.search}",
                    oninput: move |e| APP_STATE.write().catalog_filter.set_search(e.value()),
                }
                Select {
                    value: filter.attribute.clone(),
                    options: collar_options(),
                    on_change: move |v: String| APP_STATE.write().catalog_filter.set_attribute(v),
                }
                span { class: "muted", "{matched} ລາຍການ" }
            }

            if items.is_empty() {
                div { class: "empty-state", "ບໍ່ພົບສິນຄ້າ" }
            } else {
                div {
                    class: "product-grid",
                    for product in items {
                        ProductCard { key: "{product.id}", product }
                    }
                }
            }

            RevealMore {
                hidden,
                on_reveal: move |_| APP_STATE.write().catalog_filter.reveal(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tabs_start_with_all() {
        let tabs = category_tabs();
        assert_eq!(tabs[0].0, ALL);
        assert_eq!(tabs.len(), Category::all().len() + 1);
    }
}
