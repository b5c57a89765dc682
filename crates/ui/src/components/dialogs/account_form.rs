//! # Account Form Dialog
//!
//! Create an admin (`/api/admin/admins`) or a customer (`/api/register`).

use dioxus::prelude::*;

use super::{DialogHeader, FormErrors};
use crate::actions;
use crate::components::inputs::TextInput;
use crate::state::APP_STATE;
use champa_core::{AccountKind, NewAccount, Validatable};

fn dialog_title(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::Admin => "ເພີ່ມຜູ້ດູແລລະບົບ",
        AccountKind::Customer => "ເພີ່ມລູກຄ້າ",
    }
}

/// Account from the raw inputs; a blank phone is left out
pub fn new_account(username: &str, phone: &str, password: &str) -> NewAccount {
    NewAccount {
        username: username.trim().to_string(),
        password: password.to_string(),
        phone: Some(phone.trim().to_string()).filter(|p| !p.is_empty()),
    }
}

#[component]
pub fn AccountFormDialog(kind: AccountKind) -> Element {
    let mut username = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut saving = use_signal(|| false);

    let submit = move |_| {
        if *saving.peek() {
            return;
        }
        let account = new_account(&username.peek(), &phone.peek(), &password.peek());
        if let Err(e) = account.validate() {
            errors.set(FormErrors::from_error(&e));
            return;
        }
        errors.set(FormErrors::default());
        saving.set(true);

        spawn(async move {
            match actions::create_account(kind, account).await {
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

    let errs = errors.read().clone();
    let busy = *saving.read();

    rsx! {
        div {
            class: "dialog-body account-form",

            DialogHeader { title: dialog_title(kind).to_string() }

            TextInput {
                label: "ຊື່ຜູ້ໃຊ້".to_string(),
                value: username.read().clone(),
                required: true,
                error: errs.on("username"),
                on_change: move |v| username.set(v),
            }
            TextInput {
                label: "ເບີໂທ".to_string(),
                value: phone.read().clone(),
                input_type: "tel".to_string(),
                error: errs.on("phone"),
                on_change: move |v| phone.set(v),
            }
            TextInput {
                label: "ລະຫັດຜ່ານ".to_string(),
                value: password.read().clone(),
                input_type: "password".to_string(),
                required: true,
                error: errs.on("password"),
                on_change: move |v| password.set(v),
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
                    if busy { "ກຳລັງບັນທຶກ..." } else { "ສ້າງບັນຊີ" }
                }
            }
        }
    }
}
