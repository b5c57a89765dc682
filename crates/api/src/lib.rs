//! # Champa API
//!
//! Client side of the storefront backend:
//!
//! - **Session**: the bearer token in client storage, `?token=` capture and
//!   the deep-link query conventions
//! - **Gateway**: authenticated JSON requests with the 401 purge rule
//! - **Endpoints**: typed calls for products, accounts, dashboard, login
//! - **Upload**: the multipart product image path
//! - **Controller**: the list state machine behind every admin page

pub mod controller;
pub mod endpoints;
pub mod gateway;
pub mod session;
pub mod upload;

pub use controller::{
    AccountListController, AccountStats, ListController, LoadState, ProductStats, StatusFilter,
    needs_login, product_stats,
};
pub use gateway::ApiGateway;
pub use session::{DeepLink, Session};
pub use upload::{ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES, SavedProduct, check_image};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::controller::{AccountListController, ListController, LoadState, StatusFilter};
    pub use crate::gateway::ApiGateway;
    pub use crate::session::{DeepLink, Session};
    pub use champa_core::{ShopError, ShopResult};
}
