//! # Dialog Components
//!
//! Modal dialogs shown over the current page. Only one is open at a time;
//! [`Dialog`](crate::state::Dialog) picks which.
//!
//! - **AddProductDialog**: add a product to the local catalog
//! - **ProductDetailDialog**: full product card
//! - **ProductFormDialog**: create or edit a remote product
//! - **AccountFormDialog**: create an admin or a customer
//! - **ConfirmDeleteDialog**: confirm an account or product deletion

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account_form;
pub mod add_product;
pub mod confirm_delete;
pub mod product_detail;
pub mod product_form;

// ============================================================================
// Re-exports
// ============================================================================

pub use account_form::AccountFormDialog;
pub use add_product::AddProductDialog;
pub use confirm_delete::ConfirmDeleteDialog;
pub use product_detail::ProductDetailDialog;
pub use product_form::ProductFormDialog;

use crate::state::APP_STATE;
use champa_core::ShopError;
use dioxus::prelude::*;

/// Where a failed form submission shows its message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub field: Option<(String, String)>,
    pub general: Option<String>,
}

impl FormErrors {
    pub fn from_error(error: &ShopError) -> Self {
        match error {
            ShopError::FieldValidation { field, message } => Self {
                field: Some((field.clone(), message.clone())),
                general: None,
            },
            other => Self {
                field: None,
                general: Some(other.user_message()),
            },
        }
    }

    /// Message for one input, if the failure was about it
    pub fn on(&self, name: &str) -> Option<String> {
        self.field
            .as_ref()
            .filter(|(field, _)| field == name)
            .map(|(_, message)| message.clone())
    }
}

/// Title bar with a close button
#[component]
pub fn DialogHeader(title: String) -> Element {
    rsx! {
        div {
            class: "dialog-header",
            h2 { class: "dialog-title", "{title}" }
            button {
                class: "btn btn-ghost dialog-close",
                onclick: move |_| APP_STATE.write().ui.close_dialog(),
                "✕"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_errors_route_field_messages() {
        let errors = FormErrors::from_error(&ShopError::field("price", "Price must be a number"));
        assert_eq!(errors.on("price").as_deref(), Some("Price must be a number"));
        assert_eq!(errors.on("name"), None);
        assert_eq!(errors.general, None);

        let errors = FormErrors::from_error(&ShopError::request_failed(Some(500), "boom"));
        assert!(errors.field.is_none());
        assert!(errors.general.is_some());
    }
}
