//! Birthday Planner Frontend Entry Point

use birthday_planner::{App, AppConfig, AppContext};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    _ = console_log::init_with_level(level);

    let config = AppConfig::from_env();
    log::info!("[MAIN] Backend at {}", config.backend_url);
    let ctx = AppContext::from_config(config);

    mount_to_body(move || view! { <App ctx=ctx /> });
}
