//! Toast notices
//!
//! Each toast removes itself [`TOAST_MILLIS`] after it is first rendered.

use crate::state::{APP_STATE, StatusLevel, TOAST_MILLIS, Toast};
use dioxus::prelude::*;
use std::time::Duration;

pub fn level_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "toast toast-info",
        StatusLevel::Success => "toast toast-success",
        StatusLevel::Warning => "toast toast-warning",
        StatusLevel::Error => "toast toast-error",
    }
}

/// Stack of live toasts in the bottom-right corner
#[component]
pub fn ToastStack() -> Element {
    let toasts = APP_STATE.read().ui.toasts.clone();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let id = toast.id;

    use_future(move || async move {
        tokio::time::sleep(Duration::from_millis(TOAST_MILLIS)).await;
        APP_STATE.write().ui.dismiss(id);
    });

    rsx! {
        div {
            class: level_class(toast.level),
            onclick: move |_| APP_STATE.write().ui.dismiss(id),
            "{toast.text}"
        }
    }
}
