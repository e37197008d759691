//! StudyFlow Frontend Entry Point

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
    let config = context::load_config();
    logging::init(config.log_level_filter());
    mount_to_body(move || view! { <App config=config.clone() /> });
}
