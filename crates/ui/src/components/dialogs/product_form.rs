//! # Product Form Dialog
//!
//! Create or edit a remote product. The image is uploaded after the
//! product itself is saved.

use dioxus::prelude::*;
use std::path::PathBuf;

use super::{DialogHeader, FormErrors};
use crate::actions;
use crate::components::inputs::{Select, SelectOption, TextArea, TextInput};
use crate::file_ops::{display_name, pick_image};
use crate::state::APP_STATE;
use champa_core::{
    COLLAR_TYPES, Category, ProductDraft, ProductRecord, ShopError, ShopResult, Validatable,
    category_label,
};

/// Text the inputs hold before it becomes a [`ProductDraft`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormInput {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub category: String,
    pub price_type: String,
}

impl ProductFormInput {
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            price: record.price.to_string(),
            stock: record.stock.map(|s| s.to_string()).unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            price_type: record.price_type.clone().unwrap_or_default(),
        }
    }

    /// Parse the numbers and validate the result
    pub fn to_draft(&self) -> ShopResult<ProductDraft> {
        let price = self
            .price
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| ShopError::field("price", "Price must be a number"))?;
        let stock = match self.stock.trim() {
            "" => None,
            s => Some(
                s.parse::<i64>()
                    .map_err(|_| ShopError::field("stock", "Stock must be a whole number"))?,
            ),
        };
        let optional = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());

        let draft = ProductDraft {
            name: self.name.trim().to_string(),
            price,
            stock,
            description: optional(&self.description),
            category: optional(&self.category),
            price_type: optional(&self.price_type),
        };
        draft.validate()?;
        Ok(draft)
    }
}

fn category_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "-")];
    options.extend(
        Category::all()
            .iter()
            .map(|c| SelectOption::new(c.as_str(), category_label(c.as_str()))),
    );
    options
}

fn collar_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "-")];
    options.extend(SelectOption::plain(COLLAR_TYPES));
    options
}

#[component]
pub fn ProductFormDialog(existing: Option<ProductRecord>) -> Element {
    let existing_id = existing.as_ref().map(|r| r.id);
    let initial = existing
        .as_ref()
        .map(ProductFormInput::from_record)
        .unwrap_or_default();

    let mut form = use_signal(move || initial);
    let mut image = use_signal(|| None::<PathBuf>);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let title = if existing_id.is_some() {
        "ແກ້ໄຂສິນຄ້າ"
    } else {
        "ເພີ່ມສິນຄ້າ"
    };

    let choose_image = move |_| {
        spawn(async move {
            match pick_image("Choose a product image").await {
                Ok(path) => image.set(Some(path)),
                Err(ShopError::Cancelled) => {}
                Err(e) => errors.set(FormErrors::from_error(&e)),
            }
        });
    };

    let submit = move |_| {
        if *saving.peek() {
            return;
        }
        let draft = match form.peek().to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(FormErrors::from_error(&e));
                return;
            }
        };
        errors.set(FormErrors::default());
        saving.set(true);
        let picked = image.peek().clone();

        spawn(async move {
            match actions::save_product(existing_id, draft, picked).await {
                Ok(()) => APP_STATE.write().ui.close_dialog(),
                Err(e) if e.is_auth() => {
                    APP_STATE.write().ui.close_dialog();
                    actions::report(e).await;
                }
                Err(e) => {
                    errors.set(FormErrors::from_error(&e));
                    saving.set(false);
                }
            }
        });
    };

    let current = form.read().clone();
    let errs = errors.read().clone();
    let busy = *saving.read();

    rsx! {
        div {
            class: "dialog-body product-form",

            DialogHeader { title: title.to_string() }

            TextInput {
                label: "ຊື່ສິນຄ້າ".to_string(),
                value: current.name.clone(),
                required: true,
                error: errs.on("name"),
                on_change: move |v| form.write().name = v,
            }

            div {
                class: "form-row",
                TextInput {
                    label: "ລາຄາ".to_string(),
                    value: current.price.clone(),
                    required: true,
                    error: errs.on("price"),
                    on_change: move |v| form.write().price = v,
                }
                TextInput {
                    label: "ຈຳນວນໃນສາງ".to_string(),
                    value: current.stock.clone(),
                    error: errs.on("stock"),
                    on_change: move |v| form.write().stock = v,
                }
            }

            div {
                class: "form-row",
                Select {
                    label: "ໝວດໝູ່".to_string(),
                    value: current.category.clone(),
                    options: category_options(),
                    on_change: move |v| form.write().category = v,
                }
                Select {
                    label: "ປະເພດຄໍເສື້ອ".to_string(),
                    value: current.price_type.clone(),
                    options: collar_options(),
                    on_change: move |v| form.write().price_type = v,
                }
            }

            TextArea {
                label: "ລາຍລະອຽດ".to_string(),
                value: current.description.clone(),
                rows: 4,
                on_change: move |v| form.write().description = v,
            }

            div {
                class: "image-picker",
                button {
                    class: "btn btn-outline",
                    disabled: busy,
                    onclick: choose_image,
                    "ເລືອກຮູບ"
                }
                if let Some(path) = image.read().as_ref() {
                    span { class: "image-name", "{display_name(path)}" }
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
                    disabled: busy,
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "ຍົກເລີກ"
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: submit,
                    if busy { "ກຳລັງບັນທຶກ..." } else { "ບັນທຶກ" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input() -> ProductFormInput {
        ProductFormInput {
            name: " Storm Jersey ".into(),
            price: "120,000".into(),
            stock: "5".into(),
            category: "jersey".into(),
            ..ProductFormInput::default()
        }
    }

    #[test]
    fn test_draft_parses_numbers() {
        let draft = input().to_draft().unwrap();
        assert_eq!(draft.name, "Storm Jersey");
        assert_eq!(draft.price, 120000.0);
        assert_eq!(draft.stock, Some(5));
        assert_eq!(draft.category.as_deref(), Some("jersey"));
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_draft_rejects_bad_numbers() {
        let bad_price = ProductFormInput {
            price: "cheap".into(),
            ..input()
        };
        assert!(matches!(
            bad_price.to_draft(),
            Err(ShopError::FieldValidation { field, .. }) if field == "price"
        ));

        let bad_stock = ProductFormInput {
            stock: "2.5".into(),
            ..input()
        };
        assert!(matches!(
            bad_stock.to_draft(),
            Err(ShopError::FieldValidation { field, .. }) if field == "stock"
        ));

        let no_name = ProductFormInput {
            name: "  ".into(),
            ..input()
        };
        assert!(no_name.to_draft().is_err());
    }

    #[test]
    fn test_form_from_record() {
        let record = ProductRecord {
            id: 3,
            name: "Kit".into(),
            price: 99.5,
            stock: None,
            image: None,
            description: Some("Breathable".into()),
            category: None,
            price_type: Some("ຄໍໂປໂລ".into()),
        };
        let form = ProductFormInput::from_record(&record);
        assert_eq!(form.price, "99.5");
        assert_eq!(form.stock, "");
        assert_eq!(form.price_type, "ຄໍໂປໂລ");
        assert_eq!(form.to_draft().unwrap(), ProductDraft::from(&record));
    }
}
