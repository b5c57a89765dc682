//! Core traits for the storefront
//!
//! Form validation and integer identity, implemented by the record types
//! and the input forms of every page.

use crate::error::{ShopError, ShopResult};
use crate::types::{
    Account, AdminIdentity, Credentials, NewAccount, Product, ProductDraft, ProductRecord,
};
use regex::Regex;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for form inputs checked locally before any request is issued
///
/// # Example
///
/// ```rust,ignore
/// use champa_core::{ShopError, ShopResult, Validatable};
///
/// struct Login {
///     username: String,
///     password: String,
/// }
///
/// impl Validatable for Login {
///     fn validate(&self) -> ShopResult<()> {
///         if self.username.trim().is_empty() {
///             return Err(ShopError::field("username", "Username is required"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the form
    ///
    /// Returns `Ok(())` if valid, or the first failing field.
    fn validate(&self) -> ShopResult<()>;

    /// Check if the form is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for forms that report more than one)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.user_message()],
        }
    }
}

/// Digits with optional leading `+`, spaces and dashes
const PHONE_PATTERN: &str = r"^\+?[0-9][0-9 \-]{5,19}$";

/// Check an optional phone number; blank counts as absent
pub fn validate_phone(phone: Option<&str>) -> ShopResult<()> {
    let Some(phone) = phone.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let pattern = Regex::new(PHONE_PATTERN).map_err(|e| ShopError::internal(e.to_string()))?;
    if pattern.is_match(phone) {
        Ok(())
    } else {
        Err(ShopError::field("phone", "Phone number is not valid"))
    }
}

impl Validatable for Credentials {
    fn validate(&self) -> ShopResult<()> {
        if self.username.trim().is_empty() {
            return Err(ShopError::field("username", "Username or phone is required"));
        }
        if self.password.trim().is_empty() {
            return Err(ShopError::field("password", "Password is required"));
        }
        Ok(())
    }
}

impl Validatable for NewAccount {
    fn validate(&self) -> ShopResult<()> {
        if self.username.trim().is_empty() {
            return Err(ShopError::field("username", "Username is required"));
        }
        if self.password.trim().is_empty() {
            return Err(ShopError::field("password", "Password is required"));
        }
        validate_phone(self.phone.as_deref())
    }
}

impl Validatable for ProductDraft {
    fn validate(&self) -> ShopResult<()> {
        if self.name.trim().is_empty() {
            return Err(ShopError::field("name", "Product name is required"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ShopError::field("price", "Price must be a number"));
        }
        Ok(())
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for records carrying an integer identifier
pub trait Identifiable {
    /// Get the identifier
    fn id(&self) -> i64;

    /// Check if this record has the given identifier
    fn matches_id(&self, id: i64) -> bool {
        self.id() == id
    }
}

impl Identifiable for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for ProductRecord {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for Account {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for AdminIdentity {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Find a record by id
pub fn find_by_id<T: Identifiable>(records: &[T], id: i64) -> Option<&T> {
    records.iter().find(|r| r.matches_id(id))
}

/// Largest identifier across several record lists, or 0 when all are empty
pub fn max_id<'a, T: Identifiable + 'a>(lists: impl IntoIterator<Item = &'a [T]>) -> i64 {
    lists
        .into_iter()
        .flat_map(|list| list.iter().map(Identifiable::id))
        .fold(0, i64::max)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct TestForm {
        name: String,
    }

    impl Validatable for TestForm {
        fn validate(&self) -> ShopResult<()> {
            if self.name.trim().is_empty() {
                Err(ShopError::field("name", "Name is required"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = TestForm {
            name: "Noy".to_string(),
        };
        assert!(valid.is_valid());
        assert!(valid.validation_errors().is_empty());

        let invalid = TestForm {
            name: "   ".to_string(),
        };
        assert!(!invalid.is_valid());
        assert_eq!(invalid.validation_errors(), vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_new_account_validation() {
        let mut account = NewAccount {
            username: "noy".to_string(),
            password: "secret".to_string(),
            phone: Some("020 5555 1234".to_string()),
        };
        assert!(account.is_valid());

        account.phone = Some("call me".to_string());
        assert!(matches!(
            account.validate(),
            Err(ShopError::FieldValidation { ref field, .. }) if field == "phone"
        ));

        account.phone = Some("  ".to_string());
        assert!(account.is_valid());

        account.password.clear();
        assert!(!account.is_valid());
    }

    #[test]
    fn test_credentials_and_draft_validation() {
        let creds = Credentials {
            username: "02055512345".to_string(),
            password: String::new(),
        };
        assert_eq!(creds.validation_errors(), vec!["Password is required".to_string()]);

        let mut draft = ProductDraft {
            name: "Polo".to_string(),
            price: 120000.0,
            ..ProductDraft::default()
        };
        assert!(draft.is_valid());
        draft.price = f64::NAN;
        assert!(!draft.is_valid());
        draft.price = 1.0;
        draft.name = " ".to_string();
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_find_and_max_id() {
        let seed = vec![Product::new(1, "a"), Product::new(6, "b")];
        let added = vec![Product::new(9, "c")];
        assert_eq!(max_id([seed.as_slice(), added.as_slice()]), 9);
        assert_eq!(find_by_id(&seed, 6).map(|p| p.title.as_str()), Some("b"));
        assert!(find_by_id(&added, 1).is_none());

        let empty: Vec<Product> = Vec::new();
        assert_eq!(max_id([empty.as_slice()]), 0);
    }
}
