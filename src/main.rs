#![allow(warnings)]
//! Roadmap Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod display;
mod error;
mod i18n;
mod logging;
mod models;
mod pages;
mod services;
mod state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = AppConfig::load();
    log::set_max_level(config.log_level());
    log::info!("[APP] starting, api base {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
