//! # Champa CLI
//!
//! Terminal front end for the Champa shop. It shares the catalog, the
//! local product cache and the session file with the desktop app.
//!
//! ## Commands
//!
//! - `products`, `add`, `search` - storefront catalog
//! - `login`, `logout`, `whoami` - session
//! - `dashboard`, `admins`, `customers`, `admin-products` - admin listings
//! - `create-account`, `delete`, `upload` - admin mutations
//!

pub mod args;
pub mod commands;
pub mod output;

pub use champa_api;
pub use champa_catalog;
pub use champa_core;

pub use args::{Cli, Command};
pub use commands::{Context, execute, run};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Log filter for a `-v` count, used when `RUST_LOG` is unset
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
