//! Todo Frontend Entry Point

mod config;
mod logging;
mod storage;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger(config::log_level());
    mount_to_body(App);
}
