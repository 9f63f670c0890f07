//! Meal Planner Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod markdown;
mod pages;
mod storage;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;
use log::{info, LevelFilter};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let config = Config::load().install();
    logging::set_level(config.log_level);
    info!("[APP] Backend at {} (timeout {} ms)", config.api_url, config.timeout_ms);

    mount_to_body(App);
}
