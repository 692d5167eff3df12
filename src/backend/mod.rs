#![cfg(feature = "server")]

pub mod config;
pub mod copa_api;
pub mod loader;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub use config::Config;
pub use copa_api::CopaApi;

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub static GLOBAL_API: OnceCell<Arc<CopaApi>> = OnceCell::new();

/// Loads `.env` before building the filter so `RUST_LOG` may come from it.
pub fn init_tracing() {
    dotenvy::dotenv().ok();
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

pub fn api() -> Result<Arc<CopaApi>> {
    GLOBAL_API
        .get()
        .cloned()
        .ok_or_else(|| anyhow!("backend API not configured"))
}
