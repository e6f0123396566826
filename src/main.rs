use log::info;

use portfolio::app::App;
use portfolio::config;
use portfolio::shell::{self, SITE_METADATA};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    shell::apply_metadata(&SITE_METADATA);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
