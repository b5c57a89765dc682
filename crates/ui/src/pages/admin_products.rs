//! Admin Products Page Component
//!
//! Search, category and collar filters over the remote product list, with
//! create, edit and delete through dialogs.

use dioxus::prelude::*;

use super::accounts::page_size_options;
use crate::components::product_card::image_src;
use crate::components::{Pager, Select, SelectOption};
use crate::hooks::use_admin_page;
use crate::state::{APP_STATE, DeleteTarget, Dialog, Page};
use champa_api::{LoadState, product_stats};
use champa_catalog::{ADMIN_DESC_LIMIT, ALL, Paging};
use champa_core::{
    COLLAR_TYPES, Category, ProductRecord, category_label, stock_badge, truncate_chars,
};

fn category_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new(ALL, "All categories")];
    options.extend(
        Category::all()
            .iter()
            .map(|c| SelectOption::new(c.as_str(), category_label(c.as_str()))),
    );
    options
}

fn collar_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "All collars")];
    options.extend(SelectOption::plain(COLLAR_TYPES));
    options
}

/// Price as shown in the table
pub fn format_price(price: f64) -> String {
    champa_catalog::dashboard::group_thousands(price.round() as i64)
}

#[component]
pub fn AdminProductsPage() -> Element {
    use_admin_page(Page::AdminProducts);

    let state = APP_STATE.read();
    let load = state.products.state().clone();
    let filter = state.products.filter().clone();
    let stats = product_stats(state.products.records());
    let view = state.products.view();
    let info = view.info;
    let rows = view.cloned_items();
    drop(state);

    let page_size = match filter.paging {
        Paging::Numbered { size, .. } => size,
        Paging::RevealAll { initial, .. } => initial,
    };

    rsx! {
        div {
            class: "page admin-page products-admin-page",

            div {
                class: "page-head",
                h1 { class: "page-title", "Products" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::ProductForm(None)),
                    "+ Add product"
                }
            }

            div {
                class: "stat-grid",
                div { class: "card stat-card", span { class: "stat-label", "Total" } span { class: "stat-value", "{stats.total}" } }
                div { class: "card stat-card", span { class: "stat-label", "In stock" } span { class: "stat-value", "{stats.in_stock}" } }
                div { class: "card stat-card", span { class: "stat-label", "Out of stock" } span { class: "stat-value", "{stats.out_of_stock}" } }
            }

            div {
                class: "toolbar-row",
                input {
                    class: "input search-input",
                    r#type: "search",
                    placeholder: "Search name or description",
                    value: "{filter.search}",
                    oninput: move |e| APP_STATE.write().products.filter_mut().set_search(e.value()),
                }
                Select {
                    value: filter.category.clone(),
                    options: category_options(),
                    on_change: move |v: String| APP_STATE.write().products.filter_mut().set_category(v),
                }
                Select {
                    value: filter.attribute.clone(),
                    options: collar_options(),
                    on_change: move |v: String| APP_STATE.write().products.filter_mut().set_attribute(v),
                }
                Select {
                    value: page_size.to_string(),
                    options: page_size_options(),
                    on_change: move |v: String| {
                        if let Ok(size) = v.parse::<usize>() {
                            APP_STATE.write().products.filter_mut().set_page_size(size);
                        }
                    },
                }
            }

            match load {
                LoadState::Loading if rows.is_empty() => rsx! { div { class: "loading-row", "Loading..." } },
                LoadState::Error(message) => rsx! { div { class: "error-row", "{message}" } },
                _ if rows.is_empty() => rsx! { div { class: "empty-state", "No products found" } },
                _ => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Category" }
                                th { "Collar" }
                                th { "Price" }
                                th { "Stock" }
                                th { "" }
                            }
                        }
                        tbody {
                            for record in rows {
                                ProductRow { key: "{record.id}", record }
                            }
                        }
                    }
                },
            }

            Pager {
                info,
                on_page: move |n| APP_STATE.write().products.filter_mut().go_to_page(n),
            }
        }
    }
}

#[component]
fn ProductRow(record: ProductRecord) -> Element {
    let base_url = APP_STATE.read().config.base_url.clone();
    let desc = truncate_chars(record.description.as_deref().unwrap_or(""), ADMIN_DESC_LIMIT);
    let category = record
        .category
        .as_deref()
        .map(category_label)
        .unwrap_or_else(|| "-".to_string());
    let collar = record.price_type.clone().unwrap_or_else(|| "-".to_string());
    let badge = stock_badge(record.stock);
    let stock = record.stock.unwrap_or(0);
    let price = format_price(record.price);

    let edit = record.clone();
    let target = DeleteTarget::Product {
        id: record.id,
        name: record.name.clone(),
    };

    rsx! {
        tr {
            td {
                div {
                    class: "product-cell",
                    if let Some(image) = record.image.as_deref() {
                        img { class: "thumb", src: "{image_src(image, &base_url)}" }
                    }
                    div {
                        div { class: "product-name", "{record.name}" }
                        div { class: "muted", "{desc}" }
                    }
                }
            }
            td { "{category}" }
            td { "{collar}" }
            td { "{price}" }
            td {
                span { "{stock} " }
                span { class: if stock > 0 { "pill pill-ok" } else { "pill pill-off" }, "{badge}" }
            }
            td {
                class: "row-actions",
                button {
                    class: "btn btn-ghost btn-small",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::ProductForm(Some(edit.clone()))),
                    "Edit"
                }
                button {
                    class: "btn btn-danger btn-small",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::ConfirmDelete(target.clone())),
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(120000.0), "120,000");
        assert_eq!(format_price(99.6), "100");
    }

    #[test]
    fn test_category_options_lead_with_all() {
        assert_eq!(category_options()[0].value, ALL);
    }
}
