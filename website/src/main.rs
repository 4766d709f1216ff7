use leptos::prelude::*;
use mrfast_website::{load_site_settings, logging, App};

fn main() {
    let (settings, settings_error) = load_site_settings();
    logging::init(&settings.logging).expect("error initializing logger");
    if let Some(e) = settings_error {
        log::warn!("Failed to load site settings, using defaults: {}", e);
    }
    mount_to_body(move || view! { <App settings=settings /> });
}
