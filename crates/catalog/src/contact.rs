//! Contact form

use champa_core::{ShopError, ShopResult, Validatable};
use serde::{Deserialize, Serialize};

/// Confirmation when a design image was attached
pub const SENT_WITH_IMAGE: &str =
    "ສົ່ງຂໍ້ຄວາມສຳເລັດ! ເລືອກຮູບແລ້ວ (ຕົວຢ່າງລະບົບ) - ກະລຸນາຕິດຕໍ່ຜ່ານ FB/TikTok/ເບີໄດ້ເລີຍ";

/// Confirmation without an image
pub const SENT: &str =
    "ສົ່ງຂໍ້ຄວາມສຳເລັດ! (ຕົວຢ່າງລະບົບ) - ກະລຸນາຕິດຕໍ່ຜ່ານ FB/TikTok/ເບີໄດ້ເລີຍ";

/// WhatsApp numbers offered in the header
pub const WHATSAPP_NUMBERS: &[(&str, &str)] = &[
    ("WhatsApp 1: +85620 12345678", "https://wa.me/8562012345678"),
    ("WhatsApp 2: +85620 78797726", "https://wa.me/8562078797726"),
];

/// Input of the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub message: String,
    /// Attached design image, if any
    pub image: Option<String>,
}

impl ContactForm {
    /// Validate and return the confirmation text
    ///
    /// Nothing is sent anywhere; the form is a demo.
    pub fn submit(&self) -> ShopResult<&'static str> {
        self.validate()?;
        Ok(if self.image.is_some() {
            SENT_WITH_IMAGE
        } else {
            SENT
        })
    }
}

impl Validatable for ContactForm {
    fn validate(&self) -> ShopResult<()> {
        let required = [
            ("name", &self.name, "Name is required"),
            ("phone", &self.phone, "Phone is required"),
            ("message", &self.message, "Message is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                return Err(ShopError::field(field, message));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Noy".to_string(),
            phone: "020 5555 1234".to_string(),
            message: "10 shirts please".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.phone = "  ".to_string();
        let err = form.submit().unwrap_err();
        assert!(matches!(err, ShopError::FieldValidation { ref field, .. } if field == "phone"));
    }

    #[test]
    fn test_message_depends_on_image() {
        let mut form = filled();
        assert_eq!(form.submit().unwrap(), SENT);
        form.image = Some("design.png".to_string());
        assert_eq!(form.submit().unwrap(), SENT_WITH_IMAGE);
    }
}
