//! # UI Components
//!
//! Reusable Dioxus components for the storefront and the admin console.
//!
//! ```text
//! Header (storefront)
//! ├── SiteSearch
//! └── session buttons
//!
//! ProductCard (catalog grid, home showcase)
//!
//! Pager / RevealMore (list footers)
//!
//! ToastStack (bottom-right notices)
//!
//! Dialogs
//! ├── AddProductDialog (local catalog)
//! ├── ProductDetailDialog
//! ├── ProductFormDialog (admin create/edit)
//! ├── AccountFormDialog
//! └── ConfirmDeleteDialog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod header;
pub mod inputs;
pub mod pager;
pub mod product_card;
pub mod toast;

// ============================================================================
// Re-exports
// ============================================================================

pub use header::{Header, SiteSearch};
pub use inputs::{Select, SelectOption, TextArea, TextInput};
pub use pager::{Pager, RevealMore};
pub use product_card::ProductCard;
pub use toast::ToastStack;

pub use dialogs::{
    AccountFormDialog, AddProductDialog, ConfirmDeleteDialog, ProductDetailDialog,
    ProductFormDialog,
};
