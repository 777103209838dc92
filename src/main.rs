//! Chore Board Frontend Entry Point

mod actions;
mod app;
mod clock;
mod commands;
mod components;
mod config;
mod context;
mod detail;
mod error;
mod form;
mod list;
mod logging;
mod models;
mod reconcile;
mod store;

use app::App;
use config::{AppConfig, PageData};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    logging::init(log::LevelFilter::Info);

    let config = AppConfig::from_document();
    log::set_max_level(logging::parse_level(&config.log_level));
    let data = PageData::from_document();

    mount_to_body(move || view! { <App config=config.clone() data=data.clone() /> });
}
