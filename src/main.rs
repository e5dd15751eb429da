//! OctoFit Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod logging;
mod models;
mod pages;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!(
        "OctoFit Tracker starting, API base: {}, timeout: {} ms",
        config.api_base,
        config.request_timeout_ms
    );

    mount_to_body(move || view! { <App config=config /> });
}
