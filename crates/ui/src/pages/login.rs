//! Login Page Component

use dioxus::prelude::*;

use crate::actions;
use crate::components::TextInput;
use crate::components::dialogs::FormErrors;
use crate::state::APP_STATE;
use champa_core::{Credentials, Validatable};

#[component]
pub fn LoginPage() -> Element {
    let mut credentials = use_signal(Credentials::default);
    let mut errors = use_signal(FormErrors::default);
    let mut busy = use_signal(|| false);
    let next = APP_STATE.read().ui.next.clone();

    let mut submit = move || {
        if *busy.peek() {
            return;
        }
        let attempt = credentials.peek().clone();
        if let Err(e) = attempt.validate() {
            errors.set(FormErrors::from_error(&e));
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);

        spawn(async move {
            if let Err(e) = actions::login(attempt).await {
                errors.set(FormErrors::from_error(&e));
            }
            busy.set(false);
        });
    };

    let current = credentials.read().clone();
    let errs = errors.read().clone();
    let loading = *busy.read();

    rsx! {
        div {
            class: "page login-page",
            div {
                class: "card login-card",
                h1 { class: "page-title", "ເຂົ້າສູ່ລະບົບ" }
                if let Some(next) = next {
                    p { class: "muted", "Log in to continue to {next}" }
                }

                TextInput {
                    label: "ຊື່ຜູ້ໃຊ້ ຫຼື ເບີໂທ".to_string(),
                    value: current.username.clone(),
                    required: true,
                    error: errs.on("username"),
                    on_change: move |v| credentials.write().username = v,
                    on_enter: move |_| submit(),
                }
                TextInput {
                    label: "ລະຫັດຜ່ານ".to_string(),
                    value: current.password.clone(),
                    input_type: "password".to_string(),
                    required: true,
                    error: errs.on("password"),
                    on_change: move |v| credentials.write().password = v,
                    on_enter: move |_| submit(),
                }

                if let Some(message) = &errs.general {
                    p { class: "form-error", "{message}" }
                }

                button {
                    class: "btn btn-primary btn-block",
                    disabled: loading,
                    onclick: move |_| submit(),
                    if loading { "ກຳລັງເຂົ້າສູ່ລະບົບ..." } else { "ເຂົ້າສູ່ລະບົບ" }
                }
            }
        }
    }
}
