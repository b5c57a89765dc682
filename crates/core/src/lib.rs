//! # Champa Core
//!
//! Core types, configuration and error handling for the Champa storefront.
//!
//! This crate provides the foundational building blocks shared by the
//! catalog, the API client, the desktop UI and the CLI:
//!
//! - **Types**: products, accounts, reviews and dashboard aggregates
//! - **Traits**: `Validatable` for forms, `Identifiable` for records
//! - **Errors**: unified error handling with `ShopError` and `ShopResult`
//! - **Config**: `ShopConfig` from `champa.toml` and `CHAMPA_*` variables
//! - **Storage**: the persistent client key-value store
//! - **Labels**: pure display mappings
//!

pub mod config;
pub mod error;
pub mod labels;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ShopConfig;
pub use error::{GENERIC_FAILURE, ShopError, ShopResult, StorageResultExt};
pub use labels::{
    COLLAR_TYPES, SPORT_TYPES, account_status, avatar_color, category_label, normalize_image_path,
    package_type_label, permissions, role_label, showcase_category, sport_type_label, stock_badge,
    time_ago, truncate_chars,
};
pub use storage::{
    ADDED_PRODUCTS_KEY, ClientStorage, FileStorage, MemoryStorage, SharedStorage, TOKEN_KEY,
};
pub use traits::{Identifiable, Validatable};
pub use types::{
    Account, AccountId, AccountKind, Activity, AdminIdentity, Category, Credentials,
    DashboardStats, LoggedInUser, LoginResponse, NewAccount, Product, ProductDraft, ProductId,
    ProductRecord, Review,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
