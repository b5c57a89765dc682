//! # Champa Catalog
//!
//! Everything the storefront derives from its product lists.
//!
//! ## Core Concepts
//!
//! - **Engine**: category, search and collar filters plus numbered or
//!   reveal-all paging over any [`Listable`] record
//! - **Sources**: built-in seed, products added on this machine, and the
//!   backend list that replaces the seed when present
//! - **Page helpers**: site search, carousels, trust reviews, the contact
//!   form and dashboard figures
//!

pub mod cache;
pub mod carousel;
pub mod contact;
pub mod dashboard;
pub mod engine;
pub mod merger;
pub mod reviews;
pub mod search;
pub mod seed;

// Re-export commonly used types at crate root
pub use cache::{AddProductForm, LocalProductCache};
pub use carousel::{HeroCarousel, SampleCarousel, visible_for_width};
pub use contact::ContactForm;
pub use dashboard::{DashboardView, Series};
pub use engine::{ALL, FilterState, Listable, PageInfo, Paging, View, derive_view, derive_view_where};
pub use merger::{Catalog, merge_sources, normalize_remote};
pub use reviews::{TrustReview, trust_reviews};
pub use search::{SearchEntry, SearchTarget, SitePage, search_index, site_search};
pub use seed::seed_products;

/// Work-card description length before truncation
pub const CARD_DESC_LIMIT: usize = 60;

/// Admin product table description length before truncation
pub const ADMIN_DESC_LIMIT: usize = 40;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::engine::{ALL, FilterState, Listable, PageInfo, Paging, derive_view};
    pub use crate::merger::Catalog;
    pub use crate::{AddProductForm, ContactForm};
    pub use champa_core::{Product, ProductRecord, ShopError, ShopResult};
}
