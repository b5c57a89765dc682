//! Product source merger
//!
//! A non-empty remote list replaces the built-in seed wholesale; locally
//! added products are always appended after it, in insertion order.

use crate::cache::{AddProductForm, LocalProductCache};
use crate::seed::seed_products;
use champa_core::{
    Product, ProductRecord, ShopResult, SharedStorage,
    labels::{normalize_image_path, stock_badge},
};
use tracing::debug;

/// Sport type given to every remote product
pub const REMOTE_TYPE: &str = "football";

/// Map a backend product row to a storefront product
pub fn normalize_remote(record: &ProductRecord) -> Product {
    Product {
        id: record.id,
        title: record.name.clone(),
        price: String::new(),
        kind: Some(REMOTE_TYPE.to_string()),
        category: Some(record.category.clone().unwrap_or_default()),
        badge: Some(stock_badge(record.stock).to_string()),
        desc: record.description.clone().unwrap_or_default(),
        image: normalize_image_path(record.image.as_deref()),
        price_type: Some(record.price_type.clone().unwrap_or_default()),
    }
}

/// Merge the three sources into the ordered list the storefront shows
pub fn merge_sources(remote: &[Product], seed: &[Product], added: &[Product]) -> Vec<Product> {
    let base = if remote.is_empty() { seed } else { remote };
    debug!(
        "Merging {} {} products with {} local ones",
        base.len(),
        if remote.is_empty() { "seed" } else { "remote" },
        added.len()
    );
    base.iter().chain(added).cloned().collect()
}

// ============================================================================
// Catalog
// ============================================================================

/// Everything the storefront knows about products
#[derive(Debug)]
pub struct Catalog {
    seed: Vec<Product>,
    remote: Vec<Product>,
    local: LocalProductCache,
}

impl Catalog {
    /// Catalog with the built-in seed and the local cache from `storage`
    pub fn load(storage: SharedStorage) -> Self {
        Self {
            seed: seed_products(),
            remote: Vec::new(),
            local: LocalProductCache::load(storage),
        }
    }

    /// Replace the remote list with freshly fetched backend rows
    pub fn set_remote(&mut self, records: &[ProductRecord]) {
        self.remote = records.iter().map(normalize_remote).collect();
    }

    /// Remote products (normalised)
    pub fn remote(&self) -> &[Product] {
        &self.remote
    }

    pub fn seed(&self) -> &[Product] {
        &self.seed
    }

    pub fn local(&self) -> &LocalProductCache {
        &self.local
    }

    /// The merged source: remote or seed, then local additions
    pub fn all_products(&self) -> Vec<Product> {
        merge_sources(&self.remote, &self.seed, self.local.products())
    }

    /// Look a product up in the merged source
    pub fn find(&self, id: i64) -> Option<Product> {
        self.all_products().into_iter().find(|p| p.id == id)
    }

    /// Add a product through the local form
    pub fn add_local(&mut self, form: AddProductForm) -> ShopResult<Product> {
        self.local.add(form, &self.seed)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use champa_core::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn record(id: i64, name: &str, stock: Option<i64>) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            price: 100.0,
            stock,
            image: Some("uploads/product/p.png".to_string()),
            description: None,
            category: Some("event".to_string()),
            price_type: Some("ຄໍມົນ".to_string()),
        }
    }

    #[test]
    fn test_normalize_remote() {
        let product = normalize_remote(&record(40, "Team Kit", Some(5)));
        assert_eq!(product.title, "Team Kit");
        assert_eq!(product.kind.as_deref(), Some("football"));
        assert_eq!(product.badge.as_deref(), Some("ມີສິນຄ້າ"));
        assert_eq!(product.desc, "");
        assert_eq!(product.image.as_deref(), Some("/static/uploads/product/p.png"));
        assert_eq!(product.effective_category(), "event");

        let sold_out = normalize_remote(&record(41, "Old Kit", Some(0)));
        assert_eq!(sold_out.badge.as_deref(), Some("ໝົດ"));
    }

    #[test]
    fn test_merge_prefers_remote() {
        let seed = seed_products();
        let remote = vec![Product::new(100, "R1"), Product::new(101, "R2")];
        let added = vec![Product::new(7, "A")];
        let merged = merge_sources(&remote, &seed, &added);
        let ids: Vec<i64> = merged.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![100, 101, 7]);
    }

    #[test]
    fn test_merge_falls_back_to_seed() {
        let seed = seed_products();
        let added = vec![Product::new(7, "A"), Product::new(8, "B")];
        let merged = merge_sources(&[], &seed, &added);
        let ids: Vec<i64> = merged.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_local_add_lands_last_with_id_seven() {
        let mut catalog = Catalog::load(MemoryStorage::shared());
        catalog
            .add_local(AddProductForm::new("Test Shirt", "LAK 10.000"))
            .unwrap();

        let all = catalog.all_products();
        assert_eq!(all.len(), 7);
        let last = all.last().unwrap();
        assert_eq!(last.id, 7);
        assert_eq!(last.title, "Test Shirt");
        assert_eq!(last.price, "LAK 10.000");
    }

    #[test]
    fn test_remote_hides_seed() {
        let mut catalog = Catalog::load(MemoryStorage::shared());
        catalog
            .add_local(AddProductForm::new("Mine", "LAK 1"))
            .unwrap();
        catalog.set_remote(&[record(1, "Server A", Some(1)), record(2, "Server B", None)]);

        let titles: Vec<String> = catalog.all_products().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Server A", "Server B", "Mine"]);
        assert!(catalog.find(3).is_none());
        assert_eq!(catalog.find(7).map(|p| p.title), Some("Mine".to_string()));
    }
}
