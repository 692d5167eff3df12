use dioxus::prelude::*;

mod api;
mod app;
mod browser;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "server")]
use std::sync::Arc;

fn main() {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::{error, info};

        backend::init_tracing();

        // Initialize the global API client once at boot
        match backend::Config::from_env().and_then(|cfg| {
            let api = backend::CopaApi::new(&cfg)?;
            Ok((cfg, api))
        }) {
            Ok((cfg, api)) => {
                let _ = backend::GLOBAL_API.set(Arc::new(api));
                info!("[api] using backend at {}", cfg.api_url);
            }
            Err(e) => {
                error!("[api] failed to init: {e:#}");
            }
        }
    }
    dioxus::launch(app::App);
}
