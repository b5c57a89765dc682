//! # Add Product Dialog
//!
//! Adds a product to the local catalog. Nothing is sent to the server.

use dioxus::prelude::*;

use super::{DialogHeader, FormErrors};
use crate::components::inputs::{Select, SelectOption, TextArea, TextInput};
use crate::file_ops::{display_name, image_reference, pick_image};
use crate::state::{APP_STATE, StatusLevel};
use champa_catalog::AddProductForm;
use champa_core::{SPORT_TYPES, ShopError, sport_type_label};

fn sport_options() -> Vec<SelectOption> {
    SPORT_TYPES
        .iter()
        .map(|t| SelectOption::new(*t, sport_type_label(Some(t))))
        .collect()
}

#[component]
pub fn AddProductDialog() -> Element {
    let mut form = use_signal(|| AddProductForm {
        kind: SPORT_TYPES[0].to_string(),
        ..AddProductForm::default()
    });
    let mut errors = use_signal(FormErrors::default);

    let choose_image = move |_| {
        spawn(async move {
            match pick_image("Choose a product image").await {
                Ok(path) => form.write().image = Some(image_reference(&path)),
                Err(ShopError::Cancelled) => {}
                Err(e) => errors.set(FormErrors::from_error(&e)),
            }
        });
    };

    let submit = move |_| {
        let submitted = form.peek().clone();
        let mut state = APP_STATE.write();
        match state.add_local_product(submitted) {
            Ok(product) => {
                state
                    .ui
                    .toast(format!("ເພີ່ມ {} ແລ້ວ", product.title), StatusLevel::Success);
                state.ui.close_dialog();
            }
            Err(e) => errors.set(FormErrors::from_error(&e)),
        }
    };

    let current = form.read().clone();
    let errs = errors.read().clone();
    let image_name = current
        .image
        .as_deref()
        .map(|i| display_name(std::path::Path::new(i)));

    rsx! {
        div {
            class: "dialog-body add-product",

            DialogHeader { title: "ເພີ່ມສິນຄ້າ".to_string() }

            TextInput {
                label: "ຊື່ສິນຄ້າ".to_string(),
                value: current.title.clone(),
                required: true,
                error: errs.on("title"),
                on_change: move |v| form.write().title = v,
            }
            TextInput {
                label: "ລາຄາ".to_string(),
                value: current.price.clone(),
                required: true,
                error: errs.on("price"),
                on_change: move |v| form.write().price = v,
            }
            Select {
                label: "ປະເພດກິລາ".to_string(),
                value: current.kind.clone(),
                options: sport_options(),
                on_change: move |v| form.write().kind = v,
            }
            TextInput {
                label: "ປ້າຍ".to_string(),
                value: current.badge.clone(),
                placeholder: "New".to_string(),
                on_change: move |v| form.write().badge = v,
            }
            TextArea {
                label: "ລາຍລະອຽດ".to_string(),
                value: current.desc.clone(),
                on_change: move |v| form.write().desc = v,
            }

            div {
                class: "image-picker",
                button { class: "btn btn-outline", onclick: choose_image, "ເລືອກຮູບ" }
                if let Some(name) = image_name {
                    span { class: "image-name", "{name}" }
                }
                if let Some(message) = errs.on("file") {
                    p { class: "field-error", "{message}" }
                }
            }

            if let Some(message) = &errs.general {
                p { class: "form-error", "{message}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "ຍົກເລີກ"
                }
                button { class: "btn btn-primary", onclick: submit, "ເພີ່ມ" }
            }
        }
    }
}
