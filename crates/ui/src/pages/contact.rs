//! Contact Page Component
//!
//! The form only validates and confirms; messages go out over WhatsApp.

use dioxus::prelude::*;

use crate::components::dialogs::FormErrors;
use crate::components::{TextArea, TextInput};
use crate::file_ops::{display_name, image_reference, pick_image};
use crate::state::{StatusLevel, notify};
use champa_catalog::ContactForm;
use champa_catalog::contact::WHATSAPP_NUMBERS;
use champa_core::ShopError;

#[component]
pub fn ContactPage() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(FormErrors::default);
    let mut sent = use_signal(|| None::<&'static str>);

    let attach = move |_| {
        spawn(async move {
            match pick_image("Attach a design").await {
                Ok(path) => form.write().image = Some(image_reference(&path)),
                Err(ShopError::Cancelled) => {}
                Err(e) => errors.set(FormErrors::from_error(&e)),
            }
        });
    };

    let submit = move |_| {
        let result = form.peek().submit();
        match result {
            Ok(confirmation) => {
                errors.set(FormErrors::default());
                sent.set(Some(confirmation));
                form.set(ContactForm::default());
                notify(confirmation, StatusLevel::Success);
            }
            Err(e) => {
                sent.set(None);
                errors.set(FormErrors::from_error(&e));
            }
        }
    };

    let current = form.read().clone();
    let errs = errors.read().clone();
    let attached = current
        .image
        .as_deref()
        .map(|i| display_name(std::path::Path::new(i)));

    rsx! {
        div {
            class: "page contact-page",
            h1 { class: "page-title", "ຕິດຕໍ່" }

            div {
                class: "contact-layout",

                div {
                    class: "card contact-form",
                    TextInput {
                        label: "ຊື່".to_string(),
                        value: current.name.clone(),
                        required: true,
                        error: errs.on("name"),
                        on_change: move |v| form.write().name = v,
                    }
                    TextInput {
                        label: "ເບີໂທ".to_string(),
                        value: current.phone.clone(),
                        input_type: "tel".to_string(),
                        required: true,
                        error: errs.on("phone"),
                        on_change: move |v| form.write().phone = v,
                    }
                    TextArea {
                        label: "ຂໍ້ຄວາມ".to_string(),
                        value: current.message.clone(),
                        rows: 5,
                        required: true,
                        error: errs.on("message"),
                        on_change: move |v| form.write().message = v,
                    }
                    div {
                        class: "image-picker",
                        button { class: "btn btn-outline", onclick: attach, "ແນບຮູບແບບ" }
                        if let Some(name) = attached {
                            span { class: "image-name", "{name}" }
                        }
                        if let Some(message) = errs.on("file") {
                            p { class: "field-error", "{message}" }
                        }
                    }
                    button { class: "btn btn-primary", onclick: submit, "ສົ່ງຂໍ້ຄວາມ" }
                    if let Some(confirmation) = *sent.read() {
                        p { class: "form-success", "{confirmation}" }
                    }
                }

                div {
                    class: "card contact-channels",
                    h2 { class: "section-title", "WhatsApp" }
                    for (label, href) in WHATSAPP_NUMBERS.iter().copied() {
                        a {
                            key: "{href}",
                            class: "channel-link",
                            href: "{href}",
                            target: "_blank",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
