//! Page Components for the Champa app
//!
//! ## Storefront
//!
//! - **HomePage**: hero carousel, showcase, trust reviews, sample strip
//! - **CatalogPage**: filterable product grid (login required)
//! - **ReviewsPage**: every customer review
//! - **ContactPage**: contact form and WhatsApp numbers
//! - **LoginPage**
//!
//! ## Admin console
//!
//! - **DashboardPage**: totals, charts and recent activity
//! - **AccountsPage**: admins or customers
//! - **AdminProductsPage**: remote product management

pub mod accounts;
pub mod admin_products;
pub mod catalog;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod reviews;

pub use accounts::AccountsPage;
pub use admin_products::AdminProductsPage;
pub use catalog::CatalogPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use reviews::ReviewsPage;
