//! Drag-and-drop Tables Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod data;
mod error;
mod logger;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
