//! # bright-beauty-landing
//!
//! Landing page for Bright Beauty Zone, a bridal studio in Lucknow, built as
//! a Leptos 0.8 client-side-rendered app.
//!
//! The page is pure composition: every section renders static content from
//! [`content::SiteContent`]. The only runtime state is the navbar's
//! scrolled/compact flag, the mobile menu, and the hero parallax offset
//! ([`state`]); entrance animations are one-shot CSS transitions armed by
//! [`dom::arm_reveal_observer`].
//!
//! All booking, package and newsletter controls are intentionally inert.
//!
//! ## Static rendering
//!
//! ```rust
//! use bright_beauty_landing::{content::SiteContent, render_page};
//!
//! let content = SiteContent::embedded().unwrap();
//! let html = render_page(&content);
//! assert!(html.contains("id=\"packages\""));
//! ```
//!
//! ---
//!
//! Bright Beauty Zone (c)2026

pub mod content;
pub mod dom;
pub mod error;
pub mod icons;
pub mod sections;
pub mod state;
pub mod styles;

use content::SiteContent;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::*;
use styles::PAGE_CSS;

/// Composition root: every section in fixed order, plus the floating chat
/// link and the mobile booking bar.
#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        nav_links,
        hero,
        experience,
        why_us,
        packages,
        testimonials,
        gallery,
        final_cta,
        footer,
        whatsapp,
        cta,
    } = content;

    view! {
        <style>{PAGE_CSS}</style>
        <div class="page">
            <Navbar
                brand=brand.clone()
                links=nav_links
                cta=cta.nav
                menu_cta=cta.mobile_menu
            />
            <main>
                <Hero hero=hero />
                <Experience experience=experience />
                <WhyUs why_us=why_us />
                <Packages packages=packages />
                <Testimonials testimonials=testimonials />
                <Gallery gallery=gallery />
                <FinalCta final_cta=final_cta />
            </main>
            <Footer brand=brand footer=footer />
            <WhatsAppButton whatsapp=whatsapp />
            <StickyCta label=cta.sticky />
        </div>
    }
}

/// Render the whole page to an HTML fragment, as it looks at scroll 0 with
/// the menu closed and nothing revealed yet.
///
/// Used by tests and for prerendering. Requires Leptos' `ssr` renderer: build
/// with the crate's `ssr` feature (tests get it through dev-dependencies).
pub fn render_page(content: &SiteContent) -> String {
    let content = content.clone();
    Owner::new().with(|| view! { <App content=content /> }.to_html())
}
