//! Spring Coffee Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod catalog;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_environment();
    let _ = console_log::init_with_level(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
