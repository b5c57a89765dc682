//! Site-wide search
//!
//! The header search box looks through a fixed list of pages plus one entry
//! per product in the merged source.

use champa_core::Product;
use std::time::Duration;

/// Maximum results shown under the search box
pub const MAX_RESULTS: usize = 10;

/// Delay between the last keystroke and the search
pub const DEBOUNCE: Duration = Duration::from_millis(150);

/// Storefront pages reachable from search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    Products,
    Reviews,
    Contact,
}

/// Where a search result leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    Page(SitePage),
    /// Catalog pre-filtered by a product title
    Product { search: String },
}

/// One search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub title: String,
    pub label: &'static str,
    pub target: SearchTarget,
}

const PAGES: &[(&str, &str, SitePage)] = &[
    ("ຫນ້າຫຼັກ", "ໜ້າ", SitePage::Home),
    ("ສິນຄ້າ", "ໜ້າ", SitePage::Products),
    ("ສິນຄ້າລີວິວ", "ໜ້າ", SitePage::Reviews),
    ("ຕິດຕໍ່", "ໜ້າ", SitePage::Contact),
    ("ຜົນງານ", "ໜ້າສິນຄ້າ", SitePage::Products),
    ("ອອກແບບເສື້ອ", "ໜ້າສິນຄ້າ", SitePage::Products),
];

const PRODUCT_LABEL: &str = "ສິນຄ້າ";

/// Build the search index over the static pages and `products`
pub fn search_index(products: &[Product]) -> Vec<SearchEntry> {
    let pages = PAGES.iter().map(|(title, label, page)| SearchEntry {
        title: title.to_string(),
        label,
        target: SearchTarget::Page(*page),
    });
    let items = products.iter().map(|p| SearchEntry {
        title: p.title.clone(),
        label: PRODUCT_LABEL,
        target: SearchTarget::Product {
            search: p.title.clone(),
        },
    });
    pages.chain(items).collect()
}

/// Entries whose title contains `query` (case-insensitive), at most [`MAX_RESULTS`]
///
/// A blank query returns nothing.
pub fn site_search(index: &[SearchEntry], query: &str) -> Vec<SearchEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&query))
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    #[test]
    fn test_blank_query_is_empty() {
        let index = search_index(&seed_products());
        assert!(site_search(&index, "   ").is_empty());
    }

    #[test]
    fn test_matches_products_and_pages() {
        let index = search_index(&seed_products());
        assert_eq!(index.len(), 12);

        let hits = site_search(&index, "blue");
        let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Jersey Pro Blue", "eSport Neon Blue", "Runner Pro Blue Wave"]);
        assert_eq!(
            hits[0].target,
            SearchTarget::Product {
                search: "Jersey Pro Blue".to_string()
            }
        );

        let hits = site_search(&index, "ຕິດຕໍ່");
        assert_eq!(hits[0].target, SearchTarget::Page(SitePage::Contact));
    }

    #[test]
    fn test_results_are_capped() {
        let products: Vec<Product> = (1..=30).map(|i| Product::new(i, format!("Kit {i}"))).collect();
        let index = search_index(&products);
        assert_eq!(site_search(&index, "kit").len(), MAX_RESULTS);
    }
}
