//! Local product cache
//!
//! Products added through the storefront form live only on this machine.
//! They are kept as a JSON array under [`ADDED_PRODUCTS_KEY`] and are never
//! reconciled with the backend.

use champa_core::{
    ADDED_PRODUCTS_KEY, Product, ShopError, ShopResult, SharedStorage, Validatable,
    storage::{read_json, write_json},
    traits::max_id,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Sport type used when the form leaves it empty
pub const DEFAULT_TYPE: &str = "football";

/// Badge used when the form leaves it empty
pub const DEFAULT_BADGE: &str = "New";

/// Description used when the form leaves it empty
pub const DEFAULT_DESC: &str = "-";

// ============================================================================
// Add-product form
// ============================================================================

/// Input of the storefront "add product" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddProductForm {
    pub title: String,
    pub price: String,
    /// Sport type; doubles as the category
    pub kind: String,
    pub badge: String,
    pub desc: String,
    /// Image reference (path or data URL)
    pub image: Option<String>,
}

impl AddProductForm {
    /// Build a form with the two required fields
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    /// Turn the form into a product with the given id, applying defaults
    pub fn into_product(self, id: i64) -> Product {
        let kind = self.kind.trim().to_string();
        let badge = self.badge.trim();
        let desc = self.desc.trim();
        Product {
            id,
            title: self.title.trim().to_string(),
            price: self.price.trim().to_string(),
            kind: Some(if kind.is_empty() {
                DEFAULT_TYPE.to_string()
            } else {
                kind.clone()
            }),
            category: Some(kind),
            badge: Some(if badge.is_empty() { DEFAULT_BADGE } else { badge }.to_string()),
            desc: if desc.is_empty() { DEFAULT_DESC } else { desc }.to_string(),
            image: self.image.filter(|image| !image.trim().is_empty()),
            price_type: None,
        }
    }
}

impl Validatable for AddProductForm {
    fn validate(&self) -> ShopResult<()> {
        if self.title.trim().is_empty() {
            return Err(ShopError::field("title", "Title is required"));
        }
        if self.price.trim().is_empty() {
            return Err(ShopError::field("price", "Price is required"));
        }
        Ok(())
    }
}

// ============================================================================
// Cache
// ============================================================================

/// Append-only list of locally added products
pub struct LocalProductCache {
    storage: SharedStorage,
    products: Vec<Product>,
}

impl std::fmt::Debug for LocalProductCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalProductCache")
            .field("products", &self.products.len())
            .finish()
    }
}

impl LocalProductCache {
    /// Load the cache; missing or corrupt data yields an empty list
    pub fn load(storage: SharedStorage) -> Self {
        let products: Vec<Product> =
            read_json(storage.as_ref(), ADDED_PRODUCTS_KEY).unwrap_or_default();
        info!("Loaded {} locally added products", products.len());
        Self { storage, products }
    }

    /// Added products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Identifier the next added product receives
    pub fn next_id(&self, seed: &[Product]) -> i64 {
        max_id([seed, self.products.as_slice()]) + 1
    }

    /// Validate the form, append the product and persist the list
    ///
    /// A failed write is logged; the product stays in the current session.
    pub fn add(&mut self, form: AddProductForm, seed: &[Product]) -> ShopResult<Product> {
        form.validate()?;
        let product = form.into_product(self.next_id(seed));
        self.products.push(product.clone());

        if let Err(e) = write_json(self.storage.as_ref(), ADDED_PRODUCTS_KEY, &self.products) {
            warn!("Could not persist added products: {e}");
        }
        info!("Added local product {} ({})", product.id, product.title);
        Ok(product)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;
    use champa_core::MemoryStorage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_assigns_next_id_and_defaults() {
        let storage = MemoryStorage::shared();
        let mut cache = LocalProductCache::load(storage.clone());
        let seed = seed_products();

        let product = cache
            .add(AddProductForm::new("Test Shirt", "LAK 10.000"), &seed)
            .unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.kind.as_deref(), Some("football"));
        assert_eq!(product.category.as_deref(), Some(""));
        assert_eq!(product.effective_category(), "jersey");
        assert_eq!(product.badge.as_deref(), Some("New"));
        assert_eq!(product.desc, "-");
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_selected_type_becomes_category() {
        let mut cache = LocalProductCache::load(MemoryStorage::shared());
        let mut form = AddProductForm::new("Run", "LAK 1");
        form.kind = "running".to_string();
        form.badge = " Hot ".to_string();
        let product = cache.add(form, &seed_products()).unwrap();
        assert_eq!(product.category.as_deref(), Some("running"));
        assert_eq!(product.badge.as_deref(), Some("Hot"));
    }

    #[test]
    fn test_missing_fields_are_rejected_before_storage() {
        let storage = MemoryStorage::shared();
        let mut cache = LocalProductCache::load(storage.clone());

        let err = cache.add(AddProductForm::new("", "LAK 1"), &[]).unwrap_err();
        assert!(err.is_validation());
        let err = cache.add(AddProductForm::new("Shirt", "  "), &[]).unwrap_err();
        assert!(err.is_validation());

        assert!(cache.is_empty());
        assert_eq!(storage.get(ADDED_PRODUCTS_KEY), None);
    }

    #[test]
    fn test_persisted_across_loads() {
        let storage = MemoryStorage::shared();
        let seed = seed_products();
        {
            let mut cache = LocalProductCache::load(storage.clone());
            cache.add(AddProductForm::new("A", "1"), &seed).unwrap();
            cache.add(AddProductForm::new("B", "2"), &seed).unwrap();
        }

        let cache = LocalProductCache::load(storage);
        let titles: Vec<&str> = cache.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(cache.next_id(&seed), 9);
    }

    #[test]
    fn test_corrupt_storage_is_empty() {
        let storage = MemoryStorage::shared();
        storage.set(ADDED_PRODUCTS_KEY, "not json").unwrap();
        let cache = LocalProductCache::load(storage);
        assert!(cache.is_empty());
        assert_eq!(cache.next_id(&seed_products()), 7);
    }
}
