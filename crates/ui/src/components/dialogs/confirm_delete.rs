//! # Confirm Delete Dialog
//!
//! Asks before deleting an account or a remote product. The list reloads
//! after the server confirms.

use dioxus::prelude::*;

use super::DialogHeader;
use crate::actions;
use crate::state::{APP_STATE, DeleteTarget};

/// Title and warning for a delete target
pub fn delete_info(target: &DeleteTarget) -> (&'static str, String) {
    match target {
        DeleteTarget::Account { kind, name, .. } => (
            "ລຶບບັນຊີ",
            format!("Delete {} account \"{}\"? This cannot be undone.", kind.role(), name),
        ),
        DeleteTarget::Product { name, .. } => (
            "ລຶບສິນຄ້າ",
            format!("Delete product \"{}\"? This cannot be undone.", name),
        ),
    }
}

#[component]
pub fn ConfirmDeleteDialog(target: DeleteTarget) -> Element {
    let mut is_deleting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let (title, message) = delete_info(&target);

    let handle_delete = {
        let target = target.clone();
        move |_| {
            if *is_deleting.peek() {
                return;
            }
            is_deleting.set(true);
            let target = target.clone();
            spawn(async move {
                match actions::delete_target(target).await {
                    Ok(()) => APP_STATE.write().ui.close_dialog(),
                    Err(e) if e.is_auth() => {
                        APP_STATE.write().ui.close_dialog();
                        actions::report(e).await;
                    }
                    Err(e) => {
                        error.set(Some(e.user_message()));
                        is_deleting.set(false);
                    }
                }
            });
        }
    };

    let deleting = *is_deleting.read();

    rsx! {
        div {
            class: "dialog-body confirm-delete",

            DialogHeader { title: title.to_string() }

            p { class: "dialog-message", "{message}" }

            if let Some(err) = error.read().as_ref() {
                p { class: "form-error", "{err}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-ghost",
                    disabled: deleting,
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "ຍົກເລີກ"
                }
                button {
                    class: "btn btn-danger",
                    disabled: deleting,
                    onclick: handle_delete,
                    if deleting { "ກຳລັງລຶບ..." } else { "ລຶບ" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use champa_core::AccountKind;

    #[test]
    fn test_delete_info_names_the_target() {
        let (_, message) = delete_info(&DeleteTarget::Account {
            kind: AccountKind::Customer,
            id: 4,
            name: "keo".into(),
        });
        assert!(message.contains("customer"));
        assert!(message.contains("keo"));

        let (_, message) = delete_info(&DeleteTarget::Product {
            id: 9,
            name: "Kit".into(),
        });
        assert!(message.contains("Kit"));
    }
}
