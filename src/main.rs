//! Study Board Frontend Entry Point

mod api;
mod app;
mod avatar;
mod cache;
mod components;
mod config;
mod constants;
mod context;
mod error;
mod filter;
mod logging;
mod models;
mod progress;
mod queries;
mod route;
mod storage;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::AppConfig::from_env().log_level);
    log::info!("study board starting");
    mount_to_body(App);
}
