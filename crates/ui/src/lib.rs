//! # Champa UI
//!
//! Dioxus desktop app for the Champa apparel shop: the storefront plus the
//! admin console.
//!
//! ## Features
//!
//! - Product catalog with category, search and collar filters
//! - Local "add product" cache kept across runs
//! - Site search with debounced results
//! - Admin console for accounts and remote products
//! - Bearer-token session captured from login or from a `?token=` link
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod file_ops;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use champa_api;
pub use champa_catalog;
pub use champa_core;

pub use app::App;
pub use state::{APP_STATE, AppState, DeleteTarget, Dialog, Page, StatusLevel, UiState, init_app_state};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Champa";

/// Application display title
pub const TITLE: &str = "Champa - Custom Sportswear";

/// Stylesheet included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Champa desktop application
///
/// `link` is an optional app link such as `/admin/dashboard?token=...`
/// opened before the first render.
///
/// ```rust,ignore
/// fn main() {
///     champa_ui::launch(std::env::args().nth(1));
/// }
/// ```
pub fn launch(link: Option<String>) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    init_app_state(link.as_deref());

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(get_styles().contains(".product-card"));
        assert!(get_styles().contains(".dialog-overlay"));
    }
}
