pub mod analytics;
pub mod charts;
pub mod config;
pub mod db;
pub mod generator;
pub mod models;

use tracing_subscriber::EnvFilter;

/// Initialize tracing. Called once from the binary entry point.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
