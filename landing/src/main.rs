// Bright Beauty Zone Landing Page - Leptos 0.8 Edition
// Bright Beauty Zone (c)2026

use bright_beauty_landing::App;
use bright_beauty_landing::content::SiteContent;
use bright_beauty_landing::dom;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger unavailable: {err}").into());
    }

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            log::error!("site content rejected, nothing mounted: {err}");
            return;
        }
    };
    log::info!(
        "content loaded: {} tiers, {} reviews, {} gallery images",
        content.packages.tiers.len(),
        content.testimonials.reviews.len(),
        content.gallery.images.len()
    );

    leptos::mount::mount_to_body(move || view! { <App content=content /> });
    dom::arm_reveal_observer();
}
