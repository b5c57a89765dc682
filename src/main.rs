//! Champa storefront
//!
//! Desktop entry point. An optional first argument is an app link such as
//! `/admin/dashboard?token=...` opened at startup.

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Champa v{}", champa_core::VERSION);

    champa_ui::launch(std::env::args().nth(1));
}
